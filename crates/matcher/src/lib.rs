//! # Role Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` reconciles role titles extracted from a PDF against the canonical
//! role set declared in an XML document. It sits on top of `canonical`, which
//! provides the normalization key and the similarity scores, and produces a
//! structured [`MatchResult`] plus a human-readable report.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: the fuzzy threshold (1..=100, default 80).
//! - [`RoleMatcher`]: runs the direct, fuzzy and partial tiers in order.
//! - [`MatchResult`]: matched XML roles, incorrect PDF roles, fuzzy pairs and
//!   a per-role [`RoleResolution`] trail.
//! - [`MatchStatistics`]: JSON-friendly counts and match rate.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{generate_report, MatchConfig, RoleMatcher};
//!
//! let matcher = RoleMatcher::new(MatchConfig::default()).expect("valid config");
//! let xml = ["Software Engineer", "Project Manager"];
//! let pdf = ["software engineer", "Projct Manager"];
//!
//! let result = matcher.compare(&xml, &pdf);
//! assert!(!result.is_incorrect);
//! assert_eq!(result.fuzzy_matches["Projct Manager"], "Project Manager");
//!
//! let report = generate_report(&result, &xml, &pdf);
//! assert!(report.contains("CONCLUSION: PASS"));
//! ```
//!
//! ## Observability
//!
//! Every resolution emits a `debug` event and each comparison ends with one
//! `info` summary. Thresholds below 50 are accepted with a `warn`.

pub mod engine;
pub mod report;
pub mod types;

pub use crate::engine::{compare_roles, RoleMatcher};
pub use crate::report::{generate_report, match_statistics, missing_xml_roles, MatchStatistics};
pub use crate::types::{
    MatchConfig, MatchError, MatchKind, MatchResult, RoleResolution, DEFAULT_FUZZY_THRESHOLD,
    RECOMMENDED_MIN_THRESHOLD,
};
