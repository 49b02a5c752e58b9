use std::fs;

use rolecheck::{validate_files, write_sample_xml, MatchKind, RolecheckConfig};
use tempfile::TempDir;

#[test]
fn sample_document_against_llm_style_listing() {
    let dir = TempDir::new().expect("temp dir");
    let xml = dir.path().join("roles.xml");
    assert!(write_sample_xml(&xml).expect("sample written"));

    let pdf = dir.path().join("pdf_roles.txt");
    fs::write(&pdf, "1. software engineer\n2. Projct Manager\n3. Astronaut\n4. QA Tester\n")
        .expect("write pdf roles");

    let outcome = validate_files(&xml, &pdf, &RolecheckConfig::default()).expect("validation");

    assert_eq!(outcome.xml_roles.len(), 6);
    assert_eq!(
        outcome.pdf_roles,
        vec!["software engineer", "Projct Manager", "Astronaut", "QA Tester"]
    );
    assert!(!outcome.is_valid());
    assert_eq!(outcome.result.incorrect_pdf_roles, vec!["Astronaut".to_string()]);
    assert_eq!(
        outcome.result.fuzzy_matches.get("Projct Manager").map(String::as_str),
        Some("Project Manager")
    );
    assert_eq!(outcome.statistics.matched_count, 3);
    assert_eq!(outcome.statistics.match_rate_percentage, 75.0);

    let kinds: Vec<MatchKind> = outcome.result.resolutions.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![MatchKind::Direct, MatchKind::Fuzzy, MatchKind::Unmatched, MatchKind::Direct]
    );

    assert!(outcome.report.contains("⊘ Senior Developer"));
    assert!(outcome.report.contains("CONCLUSION: FAIL"));
}

#[test]
fn none_listing_passes_with_every_xml_role_missing() {
    let dir = TempDir::new().expect("temp dir");
    let xml = dir.path().join("roles.xml");
    write_sample_xml(&xml).expect("sample written");
    let pdf = dir.path().join("pdf_roles.txt");
    fs::write(&pdf, "None\n").expect("write pdf roles");

    let outcome = validate_files(&xml, &pdf, &RolecheckConfig::default()).expect("validation");

    assert!(outcome.is_valid());
    assert!(outcome.pdf_roles.is_empty());
    assert_eq!(outcome.statistics.match_rate_percentage, 0.0);
    assert!(outcome.report.contains("(No matches found)"));
    assert!(outcome.report.contains("⊘ Data Scientist"));
}

#[test]
fn config_file_drives_element_name_and_threshold() {
    let dir = TempDir::new().expect("temp dir");
    let xml = dir.path().join("jobs.xml");
    fs::write(&xml, "<jobs><title>Software Engineer</title></jobs>").expect("write xml");
    let pdf = dir.path().join("pdf_roles.txt");
    fs::write(&pdf, "SW Eng").expect("write pdf roles");

    let strict = RolecheckConfig::from_yaml("version: \"1.0\"\nxml:\n  role_element: title\n")
        .expect("config");
    let outcome = validate_files(&xml, &pdf, &strict).expect("validation");
    assert!(!outcome.is_valid());

    let loose = RolecheckConfig::from_yaml(
        "version: \"1.0\"\nmatcher:\n  fuzzy_threshold: 65\nxml:\n  role_element: title\n",
    )
    .expect("config");
    let outcome = validate_files(&xml, &pdf, &loose).expect("validation");
    assert!(outcome.is_valid());
    assert_eq!(outcome.result.resolutions[0].kind, MatchKind::Partial);
}
