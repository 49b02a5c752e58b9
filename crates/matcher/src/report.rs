//! Human-readable report and statistics summary for a [`MatchResult`].
//!
//! Both outputs are derived purely from the result and the two input lists:
//! no timestamps, no randomness. Identical arguments give byte-identical text.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::types::MatchResult;

const RULE: &str = "============================================================";

/// Non-textual summary of a comparison, suitable for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchStatistics {
    /// Distinct XML roles, compared case-insensitively.
    pub total_xml_roles: usize,
    /// Distinct PDF roles as extracted.
    pub total_pdf_roles: usize,
    pub matched_count: usize,
    pub fuzzy_matched_count: usize,
    pub incorrect_count: usize,
    /// `matched_count / total_pdf_roles * 100`, two decimals, 0 without PDF roles.
    pub match_rate_percentage: f64,
    pub is_valid: bool,
    pub matched_roles: Vec<String>,
    pub incorrect_roles: Vec<String>,
}

/// Compute the statistics summary for a comparison.
pub fn match_statistics<S, T>(result: &MatchResult, xml_roles: &[S], pdf_roles: &[T]) -> MatchStatistics
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let total_xml_roles = xml_roles
        .iter()
        .map(|r| r.as_ref().to_lowercase())
        .collect::<HashSet<_>>()
        .len();
    let total_pdf_roles = pdf_roles
        .iter()
        .map(|r| r.as_ref())
        .collect::<HashSet<_>>()
        .len();
    let matched_count = result.matched_xml_roles.len();
    let incorrect_count = result.incorrect_pdf_roles.len();

    let match_rate_percentage = if total_pdf_roles > 0 {
        round2(matched_count as f64 / total_pdf_roles as f64 * 100.0)
    } else {
        0.0
    };

    MatchStatistics {
        total_xml_roles,
        total_pdf_roles,
        matched_count,
        fuzzy_matched_count: result.fuzzy_matches.len(),
        incorrect_count,
        match_rate_percentage,
        is_valid: incorrect_count == 0,
        matched_roles: result.matched_xml_roles.clone(),
        incorrect_roles: result.incorrect_pdf_roles.clone(),
    }
}

/// XML roles (input order) whose lowercase form is not among the matched roles.
pub fn missing_xml_roles<'x, S: AsRef<str>>(result: &MatchResult, xml_roles: &'x [S]) -> Vec<&'x str> {
    let matched: HashSet<String> = result
        .matched_xml_roles
        .iter()
        .map(|r| r.to_lowercase())
        .collect();
    xml_roles
        .iter()
        .map(|r| r.as_ref())
        .filter(|r| !matched.contains(&r.to_lowercase()))
        .collect()
}

/// Render the validation report.
///
/// Sections, in order: statistics, matched roles (fuzzy ones annotated with
/// the PDF spelling), incorrect PDF roles, XML roles absent from the PDF
/// (omitted when empty), and the PASS/FAIL conclusion.
pub fn generate_report<S, T>(result: &MatchResult, xml_roles: &[S], pdf_roles: &[T]) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let stats = match_statistics(result, xml_roles, pdf_roles);

    // XML role -> alphabetically first PDF spelling that reached it fuzzily.
    let mut fuzzy_sources: BTreeMap<&str, &str> = BTreeMap::new();
    for (pdf_role, xml_role) in &result.fuzzy_matches {
        fuzzy_sources
            .entry(xml_role.as_str())
            .or_insert(pdf_role.as_str());
    }

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "       ROLE VALIDATION REPORT");
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "\nSTATISTICS:");
    let _ = writeln!(out, "  • Total Unique Roles in XML: {}", stats.total_xml_roles);
    let _ = writeln!(out, "  • Total Unique Roles in PDF: {}", stats.total_pdf_roles);
    let _ = writeln!(out, "  • Successfully Matched: {}", stats.matched_count);
    let _ = writeln!(out, "  • Fuzzy Matched: {}", stats.fuzzy_matched_count);
    let _ = writeln!(out, "  • Incorrect/Unmatched: {}", stats.incorrect_count);

    let _ = writeln!(out, "\nMATCHED ROLES (XML <-> PDF):");
    if result.matched_xml_roles.is_empty() {
        let _ = writeln!(out, "  (No matches found)");
    }
    for role in &result.matched_xml_roles {
        match fuzzy_sources.get(role.as_str()) {
            Some(pdf_role) => {
                let _ = writeln!(out, "  ≈ {role} (fuzzy matched: '{pdf_role}')");
            }
            None => {
                let _ = writeln!(out, "  ✓ {role}");
            }
        }
    }

    let _ = writeln!(out, "\nINCORRECT PDF ROLES (Not in XML):");
    if result.incorrect_pdf_roles.is_empty() {
        let _ = writeln!(out, "  (None - All PDF roles matched XML)");
    }
    for role in &result.incorrect_pdf_roles {
        let _ = writeln!(out, "  ✗ {role}");
    }

    let missing = missing_xml_roles(result, xml_roles);
    if !missing.is_empty() {
        let _ = writeln!(out, "\nROLES IN XML BUT NOT FOUND IN PDF:");
        for role in missing {
            let _ = writeln!(out, "  ⊘ {role}");
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    if result.is_incorrect {
        let _ = writeln!(out, "CONCLUSION: FAIL - PDF CONTAINS INCORRECT ROLES");
        let _ = writeln!(out, "   -> Some roles in the PDF do not match XML definitions");
    } else {
        let _ = writeln!(out, "CONCLUSION: PASS - ALL PDF ROLES ARE CORRECT");
        let _ = writeln!(out, "   -> All roles in PDF match XML definitions");
    }
    let _ = writeln!(out, "{RULE}");

    out
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoleMatcher;

    fn compare(xml: &[&str], pdf: &[&str]) -> MatchResult {
        RoleMatcher::default().compare(xml, pdf)
    }

    #[test]
    fn passing_report_has_all_sections_in_order() {
        let xml = ["Software Engineer", "Project Manager", "Data Scientist"];
        let pdf = ["Software Engineer", "Managar"];
        let result = compare(&xml, &pdf);
        let report = generate_report(&result, &xml, &pdf);

        let stats_at = report.find("STATISTICS:").expect("stats section");
        let matched_at = report.find("MATCHED ROLES").expect("matched section");
        let incorrect_at = report.find("INCORRECT PDF ROLES").expect("incorrect section");
        let missing_at = report.find("ROLES IN XML BUT NOT FOUND IN PDF").expect("gap section");
        let conclusion_at = report.find("CONCLUSION: PASS").expect("conclusion");

        assert!(stats_at < matched_at);
        assert!(matched_at < incorrect_at);
        assert!(incorrect_at < missing_at);
        assert!(missing_at < conclusion_at);
    }

    #[test]
    fn fuzzy_matches_are_annotated_with_pdf_spelling() {
        let xml = ["Manager", "Software Engineer"];
        let pdf = ["Managar", "Software Engineer"];
        let result = compare(&xml, &pdf);
        let report = generate_report(&result, &xml, &pdf);

        assert!(report.contains("  ≈ Manager (fuzzy matched: 'Managar')"));
        assert!(report.contains("  ✓ Software Engineer"));
        assert!(report.contains("  (None - All PDF roles matched XML)"));
        assert!(!report.contains("ROLES IN XML BUT NOT FOUND IN PDF"));
    }

    #[test]
    fn failing_report_lists_incorrect_roles() {
        let xml = ["Manager"];
        let pdf = ["Astronaut"];
        let result = compare(&xml, &pdf);
        let report = generate_report(&result, &xml, &pdf);

        assert!(report.contains("  (No matches found)"));
        assert!(report.contains("  ✗ Astronaut"));
        assert!(report.contains("  ⊘ Manager"));
        assert!(report.contains("CONCLUSION: FAIL"));
        assert!(!report.contains("CONCLUSION: PASS"));
    }

    #[test]
    fn report_is_byte_identical_across_runs() {
        let xml = ["Software Engineer", "Project Manager", "QA Tester"];
        let pdf = ["Software Eng", "Projct Manager", "Chef", "Astronaut"];
        let first = generate_report(&compare(&xml, &pdf), &xml, &pdf);
        let second = generate_report(&compare(&xml, &pdf), &xml, &pdf);
        assert_eq!(first, second);
    }

    #[test]
    fn full_report_layout() {
        let xml = ["Manager", "QA Tester"];
        let pdf = ["Managar", "Chef"];
        let result = compare(&xml, &pdf);

        let expected = "\
============================================================
       ROLE VALIDATION REPORT
============================================================

STATISTICS:
  • Total Unique Roles in XML: 2
  • Total Unique Roles in PDF: 2
  • Successfully Matched: 1
  • Fuzzy Matched: 1
  • Incorrect/Unmatched: 1

MATCHED ROLES (XML <-> PDF):
  ≈ Manager (fuzzy matched: 'Managar')

INCORRECT PDF ROLES (Not in XML):
  ✗ Chef

ROLES IN XML BUT NOT FOUND IN PDF:
  ⊘ QA Tester

============================================================
CONCLUSION: FAIL - PDF CONTAINS INCORRECT ROLES
   -> Some roles in the PDF do not match XML definitions
============================================================
";
        assert_eq!(generate_report(&result, &xml, &pdf), expected);
    }

    #[test]
    fn statistics_count_distinct_roles() {
        let xml = ["Manager", "manager", "Engineer"];
        let pdf = ["Manager", "Manager", "Chef", "Managar"];
        let result = compare(&xml, &pdf);
        let stats = match_statistics(&result, &xml, &pdf);

        assert_eq!(stats.total_xml_roles, 2);
        assert_eq!(stats.total_pdf_roles, 3);
        assert_eq!(stats.matched_count, 1);
        assert_eq!(stats.fuzzy_matched_count, 1);
        assert_eq!(stats.incorrect_count, 1);
        assert_eq!(stats.match_rate_percentage, 33.33);
        assert!(!stats.is_valid);
        assert_eq!(stats.incorrect_roles, vec!["Chef".to_string()]);
    }

    #[test]
    fn statistics_without_pdf_roles() {
        let xml = ["Engineer"];
        let pdf: [&str; 0] = [];
        let result = compare(&xml, &pdf);
        let stats = match_statistics(&result, &xml, &pdf);

        assert_eq!(stats.total_pdf_roles, 0);
        assert_eq!(stats.match_rate_percentage, 0.0);
        assert!(stats.is_valid);
    }

    #[test]
    fn missing_roles_use_case_insensitive_membership() {
        let result = MatchResult {
            matched_xml_roles: vec!["Project Manager".into()],
            ..Default::default()
        };
        let xml = ["PROJECT MANAGER", "Data Scientist"];
        assert_eq!(missing_xml_roles(&result, &xml), vec!["Data Scientist"]);
    }

    #[test]
    fn statistics_serialize_to_json() {
        let xml = ["Manager"];
        let pdf = ["Manager"];
        let stats = match_statistics(&compare(&xml, &pdf), &xml, &pdf);
        let value = serde_json::to_value(&stats).expect("serialize");
        assert_eq!(value["match_rate_percentage"], 100.0);
        assert_eq!(value["is_valid"], true);
    }
}
