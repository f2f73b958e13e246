use bmilogapp::engine::{categorize, compute_bmi};
use bmilogapp::error::BmiError;
use bmilogapp::model::Category;
use bmilogapp::store::fs_backend::FsBackend;
use bmilogapp::store::RecordStore;
use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, RecordStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(FsBackend::new(dir.path().to_path_buf()));
    (dir, store)
}

#[test]
fn appended_records_survive_a_fresh_store() {
    let (dir, mut store) = setup();
    let bmi = compute_bmi(68.4, 171.2);
    let created = store.append(68.4, 171.2, bmi, "Normal").unwrap();

    let reopened = RecordStore::new(FsBackend::new(dir.path().to_path_buf()));
    let loaded = reopened.load_all().unwrap();
    assert_eq!(loaded, vec![created]);
    assert_eq!(loaded[0].bmi.to_bits(), bmi.to_bits());
    assert_eq!(loaded[0].band(), Category::Normal);
}

#[test]
fn reads_data_written_by_the_browser_version() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("bmi_records.json"),
        r#"[
            {"id":"1717900000000","date":"2024-06-09","weightKg":70,"heightCm":175,"bmi":22.857142857142858,"category":"ปกติ"},
            {"id":"1718000000000","date":"2024-06-10","weightKg":45,"heightCm":170,"bmi":15.570934256055365,"category":"น้ำหนักน้อย"}
        ]"#,
    )
    .unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].date,
        Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap()
    );
    assert_eq!(categorize(records[1].bmi), Category::Underweight);
}

#[test]
fn corrupt_file_is_an_error_until_cleared() {
    let (dir, mut store) = setup();
    fs::write(dir.path().join("bmi_records.json"), "not json at all").unwrap();

    let err = store.load_all().unwrap_err();
    assert!(matches!(err, BmiError::CorruptData(_)));
    assert!(err.to_string().contains("bmilog clear"));

    store.clear().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn remove_and_clear_leave_no_lock_behind() {
    let (dir, mut store) = setup();
    let rec = store.append(70.0, 175.0, 22.86, "Normal").unwrap();
    store.remove(&rec.id).unwrap();
    store.clear().unwrap();
    assert!(!dir.path().join("bmi_records.lock").exists());
}
