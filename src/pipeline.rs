use std::fs;
use std::path::Path;
use std::time::Instant;

use ingest::{clean_extracted_roles, read_xml_roles, IngestError};
use matcher::{
    generate_report, match_statistics, MatchConfig, MatchError, MatchResult, MatchStatistics,
    RoleMatcher,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn, Level};

use crate::config::{ConfigLoadError, RolecheckConfig};

/// Errors that can occur while validating a role document pair.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("ingest failure: {0}")]
    Ingest(#[from] IngestError),

    #[error("match failure: {0}")]
    Match(#[from] MatchError),

    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("failed to read PDF roles: {0}")]
    PdfRoles(#[source] std::io::Error),

    /// The XML side is the reference; comparing against nothing is refused.
    #[error("no roles found in the XML document")]
    NoXmlRoles,
}

/// Everything one validation run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub xml_roles: Vec<String>,
    pub pdf_roles: Vec<String>,
    pub result: MatchResult,
    pub statistics: MatchStatistics,
    pub report: String,
}

impl ValidationOutcome {
    /// True when every PDF role resolved to an XML role.
    pub fn is_valid(&self) -> bool {
        !self.result.is_incorrect
    }
}

/// Compare two in-memory role lists and bundle result, statistics and report.
pub fn validate_roles<S, T>(
    xml_roles: &[S],
    pdf_roles: &[T],
    config: &MatchConfig,
) -> Result<ValidationOutcome, PipelineError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if xml_roles.is_empty() {
        return Err(PipelineError::NoXmlRoles);
    }

    let matcher = RoleMatcher::new(*config)?;
    let result = matcher.compare(xml_roles, pdf_roles);
    let statistics = match_statistics(&result, xml_roles, pdf_roles);
    let report = generate_report(&result, xml_roles, pdf_roles);

    Ok(ValidationOutcome {
        xml_roles: to_owned(xml_roles),
        pdf_roles: to_owned(pdf_roles),
        result,
        statistics,
        report,
    })
}

/// Read the XML role document and the PDF role listing from disk and validate.
///
/// The PDF listing is free text (one role per line, comma separated, bulleted,
/// or the literal `None`) and goes through [`clean_extracted_roles`].
pub fn validate_files(
    xml_path: impl AsRef<Path>,
    pdf_roles_path: impl AsRef<Path>,
    config: &RolecheckConfig,
) -> Result<ValidationOutcome, PipelineError> {
    let start = Instant::now();
    let xml_path = xml_path.as_ref();
    let pdf_roles_path = pdf_roles_path.as_ref();

    let span = tracing::span!(
        Level::INFO,
        "rolecheck.validate_files",
        xml = %xml_path.display(),
        pdf_roles = %pdf_roles_path.display()
    );
    let _guard = span.enter();

    match validate_files_inner(xml_path, pdf_roles_path, config) {
        Ok(outcome) => {
            info!(
                xml_roles = outcome.xml_roles.len(),
                pdf_roles = outcome.pdf_roles.len(),
                is_valid = outcome.is_valid(),
                elapsed_micros = start.elapsed().as_micros(),
                "validation_success"
            );
            Ok(outcome)
        }
        Err(err) => {
            warn!(
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "validation_failure"
            );
            Err(err)
        }
    }
}

fn validate_files_inner(
    xml_path: &Path,
    pdf_roles_path: &Path,
    config: &RolecheckConfig,
) -> Result<ValidationOutcome, PipelineError> {
    let xml_roles = read_xml_roles(xml_path, &config.xml.role_element)?;
    let raw = fs::read_to_string(pdf_roles_path).map_err(PipelineError::PdfRoles)?;
    let pdf_roles = clean_extracted_roles(&raw);
    validate_roles(&xml_roles, &pdf_roles, &config.match_config())
}

fn to_owned<S: AsRef<str>>(roles: &[S]) -> Vec<String> {
    roles.iter().map(|r| r.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_roles_bundles_everything() {
        let outcome = validate_roles(
            &["Manager", "Chef"],
            &["Managar"],
            &MatchConfig::default(),
        )
        .expect("valid run");

        assert!(outcome.is_valid());
        assert_eq!(outcome.xml_roles, vec!["Manager", "Chef"]);
        assert_eq!(outcome.pdf_roles, vec!["Managar"]);
        assert_eq!(outcome.statistics.fuzzy_matched_count, 1);
        assert!(outcome.report.contains("⊘ Chef"));
    }

    #[test]
    fn empty_xml_side_is_refused() {
        let xml: [&str; 0] = [];
        let err = validate_roles(&xml, &["Manager"], &MatchConfig::default()).expect_err("empty xml");
        assert!(matches!(err, PipelineError::NoXmlRoles));
    }

    #[test]
    fn invalid_threshold_is_a_match_error() {
        let err = validate_roles(&["A"], &["A"], &MatchConfig::with_threshold(0))
            .expect_err("zero threshold");
        assert!(matches!(err, PipelineError::Match(_)));
    }

    #[test]
    fn outcome_serializes_to_json() {
        let outcome =
            validate_roles(&["Chef"], &["Baker"], &MatchConfig::default()).expect("valid run");
        let value = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(value["result"]["incorrect_pdf_roles"][0], "Baker");
        assert_eq!(value["statistics"]["is_valid"], false);
        assert!(value["report"].as_str().is_some());
    }
}
