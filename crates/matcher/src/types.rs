use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::collections::BTreeMap;

/// Threshold used when nothing else is configured.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 80;

/// Lower edge of the recommended threshold range. Anything below is accepted
/// but matches almost any pair of titles.
pub const RECOMMENDED_MIN_THRESHOLD: u8 = 50;

/// Configuration for a single comparison.
///
/// `MatchConfig` is cheap to copy and serde-friendly so it can be embedded in
/// file-based configs or HTTP requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Minimum similarity score (1..=100) for the fuzzy and partial tiers.
    #[serde(default = "MatchConfig::default_fuzzy_threshold")]
    pub fuzzy_threshold: u8,
}

impl MatchConfig {
    pub(crate) fn default_fuzzy_threshold() -> u8 {
        DEFAULT_FUZZY_THRESHOLD
    }

    /// Convenience constructor for an explicit threshold.
    pub fn with_threshold(fuzzy_threshold: u8) -> Self {
        Self { fuzzy_threshold }
    }

    /// Validate the configuration.
    ///
    /// A threshold of 0 would accept every candidate and anything above 100
    /// would reject every candidate; both are rejected.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.fuzzy_threshold == 0 {
            return Err(MatchError::InvalidConfig(
                "fuzzy_threshold must be greater than zero".into(),
            ));
        }
        if self.fuzzy_threshold > 100 {
            return Err(MatchError::InvalidConfig(format!(
                "fuzzy_threshold must be <= 100, got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_FUZZY_THRESHOLD)
    }
}

/// Which tier resolved a PDF role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized keys are identical.
    Direct,
    /// Whole-string similarity cleared the threshold.
    Fuzzy,
    /// Best-window substring similarity cleared the threshold.
    Partial,
    /// No XML role was close enough.
    Unmatched,
}

/// Outcome for one PDF role, in PDF input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleResolution {
    /// PDF spelling as received.
    pub pdf_role: String,
    /// Canonical XML spelling, if any tier matched.
    pub xml_role: Option<String>,
    pub kind: MatchKind,
}

/// Result of reconciling PDF roles against the XML role set.
///
/// `matched_xml_roles` and `incorrect_pdf_roles` are deduplicated and sorted
/// by plain string ordering. Every value of `fuzzy_matches` also appears in
/// `matched_xml_roles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    /// True when at least one PDF role found no XML counterpart.
    pub is_incorrect: bool,
    /// XML roles (XML spelling) reached by any tier.
    pub matched_xml_roles: Vec<String>,
    /// PDF roles (PDF spelling) that no tier resolved.
    pub incorrect_pdf_roles: Vec<String>,
    /// PDF spelling -> XML spelling for fuzzy and partial matches.
    pub fuzzy_matches: BTreeMap<String, String>,
    /// Per-PDF-role trail of how each role was resolved.
    pub resolutions: Vec<RoleResolution>,
}

impl MatchResult {
    /// Number of PDF roles resolved by each tier, as `(direct, fuzzy, partial, unmatched)`.
    pub fn tier_counts(&self) -> (usize, usize, usize, usize) {
        self.resolutions
            .iter()
            .fold((0, 0, 0, 0), |(d, f, p, u), r| match r.kind {
                MatchKind::Direct => (d + 1, f, p, u),
                MatchKind::Fuzzy => (d, f + 1, p, u),
                MatchKind::Partial => (d, f, p + 1, u),
                MatchKind::Unmatched => (d, f, p, u + 1),
            })
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid configuration supplied by the caller.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
