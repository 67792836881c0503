use std::fs;
use studenthub_core::{
    CourseDeadline, JsonStore, Profile, RecordMap, StoreError, StudentRecord,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonStore {
    JsonStore::new(dir.path().join("student_data.json"))
}

fn sample_record() -> StudentRecord {
    StudentRecord {
        password: "terp123".to_string(),
        profile: Profile {
            name: "Amina".to_string(),
            dob: "01/15".to_string(),
            preferences: "quiet mornings".to_string(),
        },
        academic_calendar: vec![CourseDeadline {
            course: "CMSC330".to_string(),
            deadline: "05-12-24".to_string(),
        }],
        ..StudentRecord::default()
    }
}

#[test]
fn save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut records = RecordMap::new();
    records.insert("amina".to_string(), sample_record());
    store.save(&records).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
}

#[test]
fn load_or_default_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = store.load_or_default().unwrap();
    assert!(records.is_empty());
}

#[test]
fn load_malformed_contents_is_malformed_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{not valid json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)), "got {err:?}");
}

#[test]
fn load_or_default_still_rejects_malformed_contents() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "[1, 2, 3]").unwrap();

    let err = store.load_or_default().unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)), "got {err:?}");
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut first = RecordMap::new();
    first.insert("amina".to_string(), sample_record());
    first.insert("bo".to_string(), StudentRecord::default());
    store.save(&first).unwrap();

    let mut second = RecordMap::new();
    second.insert("amina".to_string(), StudentRecord::default());
    store.save(&second).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded["amina"], StudentRecord::default());
}
