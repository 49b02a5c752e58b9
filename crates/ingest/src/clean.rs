//! Cleanup of free-form role lists, as returned by a language model or typed
//! by hand.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Bullets, dashes, asterisks, list numbers and dots at the start of a line.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[\s\-•*\d.]+").expect("list marker pattern is valid"));

static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]").expect("delimiter pattern is valid"));

/// Turn a raw role listing into a clean, deduplicated role list.
///
/// Accepts comma, semicolon or newline separated values, bulleted and
/// numbered lists, and the literal answer `None`. Duplicates are dropped
/// case-insensitively, keeping the first spelling and the original order.
///
/// ```
/// use ingest::clean_extracted_roles;
///
/// assert_eq!(
///     clean_extracted_roles("Engineer, Manager, Developer"),
///     vec!["Engineer", "Manager", "Developer"]
/// );
/// assert!(clean_extracted_roles("None").is_empty());
/// ```
pub fn clean_extracted_roles(raw: &str) -> Vec<String> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    let stripped = LIST_MARKER.replace_all(raw, "");

    let mut seen = HashSet::new();
    DELIMITER
        .split(&stripped)
        .map(str::trim)
        .filter(|role| !role.is_empty() && !role.eq_ignore_ascii_case("none"))
        .filter(|role| seen.insert(role.to_lowercase()))
        .map(str::to_string)
        .collect()
}
