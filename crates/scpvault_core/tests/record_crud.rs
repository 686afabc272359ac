use chrono::NaiveDateTime;
use scpvault_core::{
    JsonCatalogStore, Record, RecordDraft, RecordService, RecordStore, StoreError,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonCatalogStore {
    JsonCatalogStore::new(dir.path().join("scp_database.json"))
}

fn draft(scp_id: &str, class: &str, name: &str) -> RecordDraft {
    RecordDraft::new(scp_id, class, name, "description body", "containment body")
}

#[test]
fn initialize_creates_empty_catalog_when_absent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.initialize().unwrap();
    assert!(store.path().exists());
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn initialize_is_idempotent_and_keeps_existing_content() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("049", "Euclid", "The Plague Doctor")).unwrap();

    store.initialize().unwrap();
    store.initialize().unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].scp_id, "049");
}

#[test]
fn add_appends_at_end_and_stamps_created_at() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();

    store.add(draft("173", "Euclid", "The Sculpture")).unwrap();
    let stored = store.add(draft("049", "Euclid", "The Plague Doctor")).unwrap();

    assert!(!stored.created_at.is_empty());
    NaiveDateTime::parse_from_str(&stored.created_at, "%Y-%m-%d %H:%M:%S")
        .expect("created_at should use the documented timestamp format");

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].scp_id, "173");
    assert_eq!(records[1], stored);
    // Every caller-provided field survives the round-trip untouched.
    assert_eq!(records[1].object_class, "Euclid");
    assert_eq!(records[1].name, "The Plague Doctor");
    assert_eq!(records[1].description, "description body");
    assert_eq!(records[1].containment_procedure, "containment body");
}

#[test]
fn add_accepts_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();

    store.add(draft("049", "Euclid", "first")).unwrap();
    store.add(draft("049", "Keter", "second")).unwrap();

    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn find_by_id_returns_first_exact_match() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("049", "Euclid", "first")).unwrap();
    store.add(draft("049", "Keter", "second")).unwrap();

    let found = store.find_by_id("049").unwrap();
    assert_eq!(found.name, "first");
}

#[test]
fn find_by_id_is_case_sensitive_and_signals_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("XXX", "Safe", "placeholder")).unwrap();

    let err = store.find_by_id("xxx").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "xxx"));

    let err = store.find_by_id("055").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "055"));
}

#[test]
fn delete_by_id_removes_every_duplicate_and_returns_count() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("049", "Euclid", "first")).unwrap();
    store.add(draft("049", "Keter", "second")).unwrap();
    store.add(draft("173", "Euclid", "survivor")).unwrap();

    let removed = store.delete_by_id("049").unwrap();
    assert_eq!(removed, 2);

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].scp_id, "173");
}

#[test]
fn delete_by_id_with_no_match_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("173", "Euclid", "survivor")).unwrap();

    assert_eq!(store.delete_by_id("049").unwrap(), 0);
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn load_all_fails_when_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn load_all_fails_on_malformed_document_without_partial_results() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{\"scps\": [not json").unwrap();

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn document_stays_valid_json_after_every_write() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    store.add(draft("049", "Euclid", "first")).unwrap();
    store.delete_by_id("049").unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["scps"].as_array().unwrap().is_empty());
}

#[test]
fn add_load_delete_scenario_end_to_end() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.initialize().unwrap();
    assert!(store.load_all().unwrap().is_empty());

    store
        .add(RecordDraft::new(
            "049",
            "Euclid",
            "The Plague Doctor's Cure-All",
            "",
            "",
        ))
        .unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    let record: &Record = &records[0];
    assert_eq!(record.scp_id, "049");
    assert_eq!(record.object_class, "Euclid");
    assert_eq!(record.name, "The Plague Doctor's Cure-All");
    assert!(!record.created_at.is_empty());

    assert_eq!(store.delete_by_id("049").unwrap(), 1);
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn service_wraps_store_calls() {
    let dir = TempDir::new().unwrap();
    let service = RecordService::new(store_in(&dir));
    service.initialize().unwrap();

    let added = service
        .add_record("682", "Keter", "Hard-to-Destroy Reptile", "d", "c")
        .unwrap();
    assert_eq!(added.scp_id, "682");

    let fetched = service.get_record("682").unwrap();
    assert_eq!(fetched.name, "Hard-to-Destroy Reptile");

    assert_eq!(service.list_records().unwrap().len(), 1);
    assert_eq!(service.delete_record("682").unwrap(), 1);
    assert!(service.list_records().unwrap().is_empty());
}
