use rolecheck::{validate_roles, MatchConfig};

const XML_ROLES: [&str; 6] = [
    "Software Engineer",
    "Project Manager",
    "Senior Developer",
    "QA Tester",
    "Business Analyst",
    "Data Scientist",
];

#[test]
fn repeated_runs_are_byte_identical() {
    let pdf = ["Projct Manager", "Astronaut", "software-engineer", "Chef", "Data Scientst"];
    let config = MatchConfig::default();

    let first = validate_roles(&XML_ROLES, &pdf, &config).expect("first run");
    for _ in 0..5 {
        let next = validate_roles(&XML_ROLES, &pdf, &config).expect("repeat run");
        assert_eq!(first.result, next.result);
        assert_eq!(first.report, next.report);
        assert_eq!(
            serde_json::to_string(&first.statistics).expect("serialize"),
            serde_json::to_string(&next.statistics).expect("serialize")
        );
    }
}

#[test]
fn pdf_order_does_not_change_the_sets() {
    let forward = ["Projct Manager", "Astronaut", "QA Tester", "Chef"];
    let backward = ["Chef", "QA Tester", "Astronaut", "Projct Manager"];
    let config = MatchConfig::default();

    let a = validate_roles(&XML_ROLES, &forward, &config).expect("forward");
    let b = validate_roles(&XML_ROLES, &backward, &config).expect("backward");

    assert_eq!(a.result.matched_xml_roles, b.result.matched_xml_roles);
    assert_eq!(a.result.incorrect_pdf_roles, b.result.incorrect_pdf_roles);
    assert_eq!(a.result.fuzzy_matches, b.result.fuzzy_matches);
    assert_eq!(a.report, b.report);
}

#[test]
fn equivalent_spellings_resolve_to_the_same_xml_role() {
    let config = MatchConfig::default();
    let spellings = ["Senior Developer", "senior developer", "SENIOR-DEVELOPER", " Senior  Developer. "];

    for spelling in spellings {
        let outcome = validate_roles(&XML_ROLES, &[spelling], &config).expect("run");
        assert_eq!(
            outcome.result.matched_xml_roles,
            vec!["Senior Developer".to_string()],
            "spelling {spelling:?}"
        );
        assert!(outcome.result.fuzzy_matches.is_empty());
    }
}
