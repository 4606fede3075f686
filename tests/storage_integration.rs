//! Storage Integration Tests
//!
//! Full lifecycle tests of the sled-backed reading store against a
//! temporary on-disk database.

use chrono::{Duration, Utc};
use tempfile::TempDir;

use vitaltrack::storage::{ReadingStore, Snapshot, StorageError};
use vitaltrack::types::{
    PressureValue, Reading, ReadingPatch, ReadingValue, UserSettings, VitalType,
};

fn open_store() -> (ReadingStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = ReadingStore::open(dir.path().join("db")).unwrap();
    (store, dir)
}

fn heart_rate(bpm: f64, days_ago: i64) -> Reading {
    let mut reading = Reading::new(
        VitalType::HeartRate,
        ReadingValue::Scalar(bpm),
        "bpm",
        None,
        None,
    );
    reading.timestamp = Utc::now() - Duration::days(days_ago);
    reading
}

#[test]
fn test_save_and_load_round_trip() {
    let (store, _dir) = open_store();

    let reading = Reading::new(
        VitalType::BloodPressure,
        ReadingValue::Pressure(PressureValue::new(135.0, 95.0)),
        "mmHg",
        None,
        Some("evening".to_string()),
    );
    store.save_reading("local", &reading).unwrap();

    let loaded = store.load_readings("local").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], reading);
    assert_eq!(loaded[0].status.as_str(), "Stage 2 Hypertension");
}

#[test]
fn test_load_is_chronological() {
    let (store, _dir) = open_store();

    // Insert out of order; iteration must come back oldest-first.
    for days_ago in [1, 10, 5] {
        store
            .save_reading("local", &heart_rate(70.0, days_ago))
            .unwrap();
    }

    let loaded = store.load_readings("local").unwrap();
    let timestamps: Vec<_> = loaded.iter().map(|r| r.timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[test]
fn test_user_partitions_are_isolated() {
    let (store, _dir) = open_store();

    store.save_reading("alice", &heart_rate(72.0, 0)).unwrap();
    store.save_reading("bob", &heart_rate(80.0, 0)).unwrap();

    assert_eq!(store.load_readings("alice").unwrap().len(), 1);
    assert_eq!(store.load_readings("bob").unwrap().len(), 1);
    assert_eq!(store.load_readings("carol").unwrap().len(), 0);

    let mut users = store.users();
    users.sort();
    assert_eq!(users, vec!["alice".to_string(), "bob".to_string()]);
}

#[test]
fn test_get_reading_by_id() {
    let (store, _dir) = open_store();

    let reading = heart_rate(72.0, 0);
    store.save_reading("local", &reading).unwrap();

    let found = store.get_reading("local", reading.id).unwrap();
    assert_eq!(found, Some(reading));

    let missing = store.get_reading("local", uuid::Uuid::new_v4()).unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_update_merges_and_reclassifies() {
    let (store, _dir) = open_store();

    let reading = heart_rate(72.0, 0);
    store.save_reading("local", &reading).unwrap();

    let patch = ReadingPatch {
        value: Some(ReadingValue::Scalar(45.0)),
        notes: Some("resting".to_string()),
        ..ReadingPatch::default()
    };
    let updated = store.update_reading("local", reading.id, &patch).unwrap();

    assert_eq!(updated.value.as_scalar(), Some(45.0));
    assert_eq!(updated.status.as_str(), "Bradycardia");
    assert_eq!(updated.notes.as_deref(), Some("resting"));
    // Untouched fields survive the merge.
    assert_eq!(updated.unit, "bpm");
    assert_eq!(updated.timestamp, reading.timestamp);

    // The store holds exactly the merged reading, not a duplicate.
    let loaded = store.load_readings("local").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], updated);
}

#[test]
fn test_update_rekeys_on_timestamp_change() {
    let (store, _dir) = open_store();

    let reading = heart_rate(72.0, 5);
    store.save_reading("local", &reading).unwrap();

    let new_ts = Utc::now() - Duration::days(1);
    let patch = ReadingPatch {
        timestamp: Some(new_ts),
        ..ReadingPatch::default()
    };
    store.update_reading("local", reading.id, &patch).unwrap();

    let loaded = store.load_readings("local").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].timestamp, new_ts);
    // Value untouched, so the status was not recomputed.
    assert_eq!(loaded[0].status, reading.status);
}

#[test]
fn test_update_missing_reading_is_not_found() {
    let (store, _dir) = open_store();

    let patch = ReadingPatch {
        notes: Some("x".to_string()),
        ..ReadingPatch::default()
    };
    let err = store
        .update_reading("local", uuid::Uuid::new_v4(), &patch)
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[test]
fn test_delete_reading() {
    let (store, _dir) = open_store();

    let reading = heart_rate(72.0, 0);
    store.save_reading("local", &reading).unwrap();

    assert!(store.delete_reading("local", reading.id).unwrap());
    assert!(!store.delete_reading("local", reading.id).unwrap());
    assert_eq!(store.load_readings("local").unwrap().len(), 0);
}

#[test]
fn test_cleanup_before_removes_prefix_only() {
    let (store, _dir) = open_store();

    for days_ago in [100, 50, 10, 1] {
        store
            .save_reading("local", &heart_rate(70.0, days_ago))
            .unwrap();
    }

    let cutoff = Utc::now() - Duration::days(30);
    let deleted = store.cleanup_before("local", cutoff).unwrap();
    assert_eq!(deleted, 2);

    let remaining = store.load_readings("local").unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|r| r.timestamp >= cutoff));
}

#[test]
fn test_search_matches_type_and_notes() {
    let (store, _dir) = open_store();

    let mut with_notes = heart_rate(72.0, 0);
    with_notes.notes = Some("Morning walk".to_string());
    store.save_reading("local", &with_notes).unwrap();

    let bp = Reading::new(
        VitalType::BloodPressure,
        ReadingValue::Pressure(PressureValue::new(118.0, 76.0)),
        "mmHg",
        None,
        None,
    );
    store.save_reading("local", &bp).unwrap();

    assert_eq!(store.search("local", "morning").unwrap().len(), 1);
    assert_eq!(store.search("local", "pressure").unwrap().len(), 1);
    assert_eq!(store.search("local", "heart").unwrap().len(), 1);
    assert_eq!(store.search("local", "glucose").unwrap().len(), 0);
}

#[test]
fn test_usage_counts_readings() {
    let (store, _dir) = open_store();

    store.save_reading("local", &heart_rate(72.0, 0)).unwrap();
    store.save_reading("local", &heart_rate(75.0, 1)).unwrap();
    store
        .save_settings("local", &UserSettings::default())
        .unwrap();

    let usage = store.usage("local").unwrap();
    assert_eq!(usage.readings_count, 2);
    assert!(usage.readings_bytes > 0);
    assert!(usage.settings_bytes > 0);
    assert_eq!(
        usage.total_bytes,
        usage.readings_bytes + usage.settings_bytes
    );
}

#[test]
fn test_settings_default_then_persist() {
    let (store, _dir) = open_store();

    let defaults = store.load_settings("local").unwrap();
    assert_eq!(defaults, UserSettings::default());

    let custom = UserSettings {
        temperature_unit: "C".to_string(),
        data_retention_days: 90,
        ..UserSettings::default()
    };
    store.save_settings("local", &custom).unwrap();
    assert_eq!(store.load_settings("local").unwrap(), custom);
}

#[test]
fn test_snapshot_export_import_with_backup() {
    let (store, _dir) = open_store();

    store.save_reading("local", &heart_rate(72.0, 0)).unwrap();
    let original = store.export_snapshot("local").unwrap();
    assert_eq!(original.version, "1.0");
    assert_eq!(original.readings.len(), 1);

    // Import a snapshot with different contents.
    let incoming = Snapshot {
        readings: vec![heart_rate(60.0, 2), heart_rate(62.0, 1)],
        settings: UserSettings {
            weight_unit: "kg".to_string(),
            ..UserSettings::default()
        },
        export_date: Utc::now(),
        version: "1.0".to_string(),
    };
    let imported = store.import_snapshot("local", &incoming).unwrap();
    assert_eq!(imported, 2);

    let readings = store.load_readings("local").unwrap();
    assert_eq!(readings.len(), 2);
    assert_eq!(store.load_settings("local").unwrap().weight_unit, "kg");

    // The pre-import state is preserved as a backup.
    let backup = store.last_import_backup("local").unwrap().unwrap();
    assert_eq!(backup.readings.len(), 1);
    assert_eq!(backup.readings[0].id, original.readings[0].id);
}

#[test]
fn test_import_rejects_unsupported_version() {
    let (store, _dir) = open_store();

    let incoming = Snapshot {
        readings: vec![],
        settings: UserSettings::default(),
        export_date: Utc::now(),
        version: "2.0".to_string(),
    };
    let err = store.import_snapshot("local", &incoming).unwrap_err();
    assert!(matches!(err, StorageError::InvalidSnapshot(_)));
}

#[test]
fn test_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");

    let reading = heart_rate(72.0, 0);
    {
        let store = ReadingStore::open(&path).unwrap();
        store.save_reading("local", &reading).unwrap();
        store.flush().unwrap();
    }

    let store = ReadingStore::open(&path).unwrap();
    let loaded = store.load_readings("local").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], reading);
}
