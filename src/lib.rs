//! Workspace umbrella crate for rolecheck.
//!
//! Reconciles role titles found in a PDF against the canonical role set of an
//! XML document. This crate stitches the role suppliers (`ingest`), the
//! normalizer and similarity scores (`canonical`) and the tiered matcher
//! (`matcher`) into a single entry point, and carries the YAML configuration
//! used by the `rolecheck` binary.
//!
//! ```
//! use rolecheck::{validate_roles, MatchConfig};
//!
//! let outcome = validate_roles(
//!     &["Software Engineer", "Project Manager"],
//!     &["software engineer", "Projct Manager"],
//!     &MatchConfig::default(),
//! )
//! .expect("valid threshold and non-empty XML roles");
//!
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.statistics.fuzzy_matched_count, 1);
//! ```

mod config;
mod pipeline;

pub use crate::config::{
    ConfigLoadError, MatcherYamlConfig, RolecheckConfig, XmlYamlConfig, FUZZY_THRESHOLD_ENV,
};
pub use crate::pipeline::{validate_files, validate_roles, PipelineError, ValidationOutcome};

pub use canonical::{normalize_role, partial_ratio, ratio};
pub use ingest::{
    clean_extracted_roles, extract_roles_from_xml, extract_roles_with_attributes,
    parse_roles_with_attributes, parse_xml_roles, read_xml_roles, validate_xml_structure,
    write_sample_xml, xml_statistics, IngestError, RoleRecord, XmlStatistics,
    DEFAULT_ROLE_ELEMENT, SAMPLE_ROLES_XML,
};
pub use matcher::{
    compare_roles, generate_report, match_statistics, MatchConfig, MatchError, MatchKind,
    MatchResult, MatchStatistics, RoleMatcher, RoleResolution, DEFAULT_FUZZY_THRESHOLD,
};
