//! Role canonicalization and similarity scoring.
//!
//! This crate turns raw role titles ("Senior-Developer ", "SOFTWARE ENGINEER!")
//! into comparison keys and scores how close two raw titles are. The matcher
//! builds its exact and fuzzy tiers on top of these primitives.
//!
//! ## What we do
//!
//! - Lowercasing, punctuation stripping, whitespace collapsing ([`normalize_role`])
//! - Whole-string edit-distance similarity ([`ratio`])
//! - Best-window substring similarity for abbreviations ([`partial_ratio`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same input, same output.
//!
//! ## Invariants worth knowing
//!
//! - `normalize_role` is idempotent
//! - Similarity scores are in `0..=100`, symmetric, and 100 on exact equality
//! - Similarity works on raw strings; callers decide whether to normalize first

mod normalize;
mod similarity;
mod whitespace;

pub use crate::normalize::{normalize_role, normalize_role_opt};
pub use crate::similarity::{fuzzy_match, fuzzy_partial_match, partial_ratio, ratio};
pub use crate::whitespace::collapse_whitespace;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalized_keys_compare_equal_across_spellings() {
        let spellings = ["Project Manager", "project-manager", "  PROJECT   MANAGER. "];
        let keys: Vec<String> = spellings.iter().map(|s| normalize_role(s)).collect();
        assert!(keys.iter().all(|k| k == "project manager"));
    }

    #[test]
    fn similarity_runs_on_raw_not_normalized_text() {
        // The scores see the casing difference even though the keys are equal.
        assert_eq!(normalize_role("QA TESTER"), normalize_role("qa tester"));
        assert!(ratio("QA TESTER", "qa tester") < 100);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "\\PC{0,40}") {
            let once = normalize_role(&s);
            prop_assert_eq!(normalize_role(&once), once);
        }

        #[test]
        fn normalized_keys_have_no_edge_or_double_spaces(s in "[ a-zA-Z.\\-!\t\n]{0,30}") {
            let key = normalize_role(&s);
            prop_assert!(!key.starts_with(' '));
            prop_assert!(!key.ends_with(' '));
            prop_assert!(!key.contains("  "));
        }
    }
}
