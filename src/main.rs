//! `rolecheck` command line interface.
//!
//! Exit status: 0 when every PDF role matched, 2 when the PDF contains
//! incorrect roles, 1 on any error.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rolecheck::{validate_files, write_sample_xml, xml_statistics, RolecheckConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rolecheck")]
#[command(about = "Validate PDF role titles against a canonical XML role set")]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "matcher=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the roles listed for a PDF against an XML role document
    Validate(ValidateArgs),

    /// Write the sample roles XML to PATH unless a file already exists there
    SampleXml {
        path: PathBuf,
    },

    /// Print statistics about an XML role document as JSON
    XmlStats {
        path: PathBuf,

        /// Element whose text is a role
        #[arg(long, default_value = rolecheck::DEFAULT_ROLE_ELEMENT)]
        role_element: String,
    },
}

#[derive(Args)]
struct ValidateArgs {
    /// XML document holding the canonical roles
    #[arg(long, value_name = "FILE")]
    xml: PathBuf,

    /// Text file with the roles extracted from the PDF
    #[arg(long = "pdf-roles", value_name = "FILE")]
    pdf_roles: PathBuf,

    /// Fuzzy threshold (1-100); overrides the config file and FUZZY_MATCH_THRESHOLD
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Element whose text is a role; overrides the config file
    #[arg(long)]
    role_element: Option<String>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Full outcome as JSON
    Json,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Validate(args) => validate(args),
        Commands::SampleXml { path } => {
            let created = write_sample_xml(&path)
                .with_context(|| format!("writing sample XML to {}", path.display()))?;
            if created {
                println!("Created sample XML file: {}", path.display());
            } else {
                println!("XML file already exists: {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::XmlStats { path, role_element } => {
            let stats = xml_statistics(&path, &role_element)
                .with_context(|| format!("reading {}", path.display()))?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&args)?;
    let outcome = validate_files(&args.xml, &args.pdf_roles, &config)?;

    let rendered = match args.format {
        OutputFormat::Text => outcome.report.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&outcome)? + "\n",
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing output to {}", path.display()))?;
            eprintln!("Output written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

/// Defaults, then the config file, then the environment, then flags.
fn resolve_config(args: &ValidateArgs) -> anyhow::Result<RolecheckConfig> {
    let mut config = match &args.config {
        Some(path) => RolecheckConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RolecheckConfig::default(),
    };
    config.apply_env_overrides()?;

    if let Some(threshold) = args.threshold {
        config.matcher.fuzzy_threshold = threshold;
    }
    if let Some(role_element) = &args.role_element {
        config.xml.role_element = role_element.clone();
    }
    config.validate()?;

    Ok(config)
}
