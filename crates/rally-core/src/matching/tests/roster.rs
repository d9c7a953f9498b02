use std::io::Write;

use super::common::trio;
use crate::config::RosterConfig;
use crate::matching::domain::{AffiliationId, CandidateId};
use crate::matching::roster::{AffiliationDirectory, CandidateRoster, RosterError};

#[test]
fn seeded_roster_preserves_fixture_declaration_order() {
    let roster = CandidateRoster::seeded();
    assert!(!roster.is_empty());
    assert_eq!(roster.all()[0].id, CandidateId::new("inf-001"));
    assert_eq!(roster.all()[1].id, CandidateId::new("inf-002"));
}

#[test]
fn get_is_a_silent_miss_for_unknown_ids() {
    let roster = CandidateRoster::new(trio());
    assert!(roster.get(&CandidateId::new("inf-a")).is_some());
    assert!(roster.get(&CandidateId::new("nobody")).is_none());
}

#[test]
fn get_all_preserves_caller_order() {
    let roster = CandidateRoster::new(trio());
    let ids = vec![
        CandidateId::new("inf-c"),
        CandidateId::new("inf-a"),
        CandidateId::new("inf-b"),
    ];

    let found = roster.get_all(&ids);
    let found_ids: Vec<&str> = found.iter().map(|candidate| candidate.id.0.as_str()).collect();
    assert_eq!(found_ids, vec!["inf-c", "inf-a", "inf-b"]);
}

#[test]
fn get_all_drops_unknown_ids_without_placeholders() {
    let roster = CandidateRoster::seeded();
    let ids = vec![
        CandidateId::new("x"),
        CandidateId::new("inf-002"),
        CandidateId::new("y"),
    ];

    let found = roster.get_all(&ids);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, CandidateId::new("inf-002"));
}

#[test]
fn directory_loads_fixture_when_no_path_configured() {
    let directory =
        AffiliationDirectory::load(&RosterConfig::default()).expect("fixture directory loads");
    assert!(directory.get(&AffiliationId::new("sch-ucla")).is_some());
    assert!(directory.get(&AffiliationId::new("sch-nowhere")).is_none());
}

#[test]
fn directory_parses_external_json_document() {
    let document = r#"[
        {"id": "sch-test", "name": "Test University", "city": "Testville", "state": "TS", "lat": 41.0, "lng": -87.5}
    ]"#;

    let directory =
        AffiliationDirectory::from_reader(document.as_bytes()).expect("document parses");
    let school = directory
        .get(&AffiliationId::new("sch-test"))
        .expect("record present");
    assert_eq!(school.name, "Test University");
    assert_eq!(school.state, "TS");
}

#[test]
fn directory_loads_from_a_configured_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id": "sch-file", "name": "File U", "city": "Diskton", "state": "IO", "lat": 10.0, "lng": 20.0}}]"#
    )
    .expect("fixture written");

    let config = RosterConfig {
        affiliations_path: Some(file.path().to_path_buf()),
    };
    let directory = AffiliationDirectory::load(&config).expect("file directory loads");
    assert_eq!(directory.all().len(), 1);
    assert!(directory.get(&AffiliationId::new("sch-file")).is_some());
}

#[test]
fn malformed_document_is_a_parse_error() {
    let result = AffiliationDirectory::from_reader("not json".as_bytes());
    assert!(matches!(result, Err(RosterError::Parse(_))));
}

#[test]
fn missing_file_is_a_read_error() {
    let config = RosterConfig {
        affiliations_path: Some("/definitely/not/here.json".into()),
    };
    let result = AffiliationDirectory::load(&config);
    assert!(matches!(result, Err(RosterError::Read { .. })));
}
