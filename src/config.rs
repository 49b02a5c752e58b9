//! YAML configuration file support.
//!
//! A single file configures both the matcher and the XML role supplier.
//! Every section is optional.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "hr-audit"
//!
//! matcher:
//!   fuzzy_threshold: 80
//!
//! xml:
//!   role_element: "role"
//! ```
//!
//! The `FUZZY_MATCH_THRESHOLD` environment variable, when set, overrides
//! `matcher.fuzzy_threshold` (see [`RolecheckConfig::apply_env_overrides`]).

use std::fs;
use std::path::Path;

use ingest::DEFAULT_ROLE_ELEMENT;
use matcher::{MatchConfig, DEFAULT_FUZZY_THRESHOLD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the configured fuzzy threshold.
pub const FUZZY_THRESHOLD_ENV: &str = "FUZZY_MATCH_THRESHOLD";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RolecheckConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    #[serde(default)]
    pub xml: XmlYamlConfig,
}

impl RolecheckConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RolecheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher.validate()?;
        self.xml.validate()?;

        Ok(())
    }

    /// Apply `FUZZY_MATCH_THRESHOLD` from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigLoadError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. On error the
    /// configuration is left unchanged.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(FUZZY_THRESHOLD_ENV) {
            let threshold = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigLoadError::InvalidEnv {
                    name: FUZZY_THRESHOLD_ENV,
                    value: raw.clone(),
                })?;
            MatcherYamlConfig {
                fuzzy_threshold: threshold,
            }
            .validate()?;
            tracing::debug!(fuzzy_threshold = threshold, "threshold overridden from environment");
            self.matcher.fuzzy_threshold = threshold;
        }
        Ok(())
    }

    /// Matcher configuration derived from this file.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::with_threshold(self.matcher.fuzzy_threshold)
    }
}

impl Default for RolecheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatcherYamlConfig::default(),
            xml: XmlYamlConfig::default(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        MatchConfig::with_threshold(self.fuzzy_threshold)
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

/// XML supplier YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XmlYamlConfig {
    /// Name of the element whose text is a role.
    #[serde(default = "default_role_element")]
    pub role_element: String,
}

impl XmlYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let name = self.role_element.as_str();
        if name.is_empty() {
            return Err(ConfigLoadError::Validation(
                "xml.role_element must not be empty".into(),
            ));
        }
        if name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\''))
        {
            return Err(ConfigLoadError::Validation(format!(
                "xml.role_element is not a valid element name: {name:?}"
            )));
        }
        Ok(())
    }
}

impl Default for XmlYamlConfig {
    fn default() -> Self {
        Self {
            role_element: default_role_element(),
        }
    }
}

fn default_fuzzy_threshold() -> u8 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_role_element() -> String {
    DEFAULT_ROLE_ELEMENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "audit"
matcher:
  fuzzy_threshold: 70
xml:
  role_element: "title"
"#;

        let config = RolecheckConfig::from_yaml(yaml).expect("valid yaml");
        assert_eq!(config.name.as_deref(), Some("audit"));
        assert_eq!(config.matcher.fuzzy_threshold, 70);
        assert_eq!(config.xml.role_element, "title");
        assert_eq!(config.match_config(), MatchConfig::with_threshold(70));
    }

    #[test]
    fn test_sections_default_when_absent() {
        let config = RolecheckConfig::from_yaml("version: \"1\"\n").expect("valid yaml");
        assert_eq!(config, RolecheckConfig::default().with_version("1"));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().expect("temp file");
        temp_file
            .write_all(b"version: \"1.0\"\nmatcher:\n  fuzzy_threshold: 90\n")
            .expect("write");

        let config = RolecheckConfig::from_file(temp_file.path()).expect("load");
        assert_eq!(config.matcher.fuzzy_threshold, 90);
    }

    #[test]
    fn test_missing_file() {
        let result = RolecheckConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let result = RolecheckConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_threshold_validation() {
        let result = RolecheckConfig::from_yaml("version: \"1.0\"\nmatcher:\n  fuzzy_threshold: 0\n");
        let err = result.expect_err("zero threshold");
        assert!(err.to_string().contains("fuzzy_threshold"));
    }

    #[test]
    fn test_threshold_out_of_u8_range_is_parse_error() {
        let result =
            RolecheckConfig::from_yaml("version: \"1.0\"\nmatcher:\n  fuzzy_threshold: 300\n");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_role_element_validation() {
        let result = RolecheckConfig::from_yaml("version: \"1.0\"\nxml:\n  role_element: \"job title\"\n");
        assert!(matches!(result, Err(ConfigLoadError::Validation(_))));
    }

    #[test]
    fn test_env_override() {
        let mut config = RolecheckConfig::default();
        config
            .apply_overrides_from(|name| (name == FUZZY_THRESHOLD_ENV).then(|| " 65 ".to_string()))
            .expect("valid override");
        assert_eq!(config.matcher.fuzzy_threshold, 65);
    }

    #[test]
    fn test_env_override_absent_keeps_file_value() {
        let mut config = RolecheckConfig::default();
        config.apply_overrides_from(|_| None).expect("no override");
        assert_eq!(config.matcher.fuzzy_threshold, 80);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = RolecheckConfig::default();
        let err = config
            .apply_overrides_from(|_| Some("high".to_string()))
            .expect_err("not a number");
        assert!(matches!(err, ConfigLoadError::InvalidEnv { .. }));

        let err = config
            .apply_overrides_from(|_| Some("0".to_string()))
            .expect_err("zero");
        assert!(matches!(err, ConfigLoadError::Validation(_)));
        assert_eq!(config.matcher.fuzzy_threshold, 80);
    }

    impl RolecheckConfig {
        fn with_version(mut self, version: &str) -> Self {
            self.version = version.to_string();
            self
        }
    }
}
