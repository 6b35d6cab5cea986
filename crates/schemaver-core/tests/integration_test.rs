//! End-to-end checks of the `VersionManager` facade.

use schemaver_core::{FieldError, Record, ValidationOutcome, VersionManager, VERSION_FIELD};
use serde_json::{json, Value};

/// A record holding exactly the required fields of `version`, all text.
fn conforming_record(manager: &VersionManager, version: u32) -> Record {
    let revision = manager.schemas().get(version).unwrap();
    revision
        .required
        .iter()
        .fold(Record::new(), |record, field| {
            record.with(field.as_str(), format!("{}-value", field))
        })
}

#[test]
fn test_conforming_records_validate_for_every_version() {
    let manager = VersionManager::new();
    for version in manager.schemas().versions() {
        let record = conforming_record(&manager, version);
        let outcome = manager.validate_schema(&record, Some(version));
        assert!(outcome.is_valid(), "version {}: {:?}", version, outcome);
        assert!(outcome.errors().is_empty());
    }
}

#[test]
fn test_each_omitted_field_yields_one_missing_error() {
    let manager = VersionManager::new();
    for version in manager.schemas().versions() {
        let required = manager.schemas().get(version).unwrap().required.clone();
        for field in &required {
            let mut record = conforming_record(&manager, version);
            record.remove(field);
            let outcome = manager.validate_schema(&record, Some(version));
            assert_eq!(
                outcome.errors(),
                &[FieldError::Missing {
                    field: field.clone()
                }],
                "version {} field {}",
                version,
                field
            );
            assert_eq!(record.len(), required.len() - 1);
        }
    }
}

#[test]
fn test_each_wrong_type_yields_one_type_error_and_null_yields_none() {
    let manager = VersionManager::new();
    for version in manager.schemas().versions() {
        let revision = manager.schemas().get(version).unwrap().clone();
        for (field, expected) in &revision.types {
            let wrong = conforming_record(&manager, version).with(field.as_str(), 42);
            let outcome = manager.validate_schema(&wrong, Some(version));
            assert_eq!(
                outcome.errors(),
                &[FieldError::WrongType {
                    field: field.clone(),
                    expected: *expected
                }]
            );

            let null = conforming_record(&manager, version).with(field.as_str(), Value::Null);
            assert!(manager.validate_schema(&null, Some(version)).is_valid());
        }
    }
}

#[test]
fn test_upgrade_to_reached_version_is_idempotent() {
    let manager = VersionManager::new();
    let record = Record::new()
        .with("id", "1")
        .with("name", "A")
        .with("created_at", "2024-01-01");

    let once = manager.upgrade_data(record, 2);
    let twice = manager.upgrade_data(once.clone(), 2);
    assert_eq!(twice, once);
    assert_eq!(manager.upgrade_data(once.clone(), 1), once);
}

#[test]
fn test_monotonic_upgrade_to_three() {
    let manager = VersionManager::new();
    let record = Record::new()
        .with("id", "1")
        .with("name", "A")
        .with("created_at", "2024-01-01");

    let upgraded = manager.upgrade_data(record, 3);
    assert_eq!(upgraded.get(VERSION_FIELD), Some(&json!(3)));
    assert_eq!(upgraded.get("email"), Some(&Value::Null));
    assert_eq!(upgraded.get("updated_at"), Some(&json!("2024-01-01")));
    assert_eq!(upgraded.get("phone"), Some(&Value::Null));
}

#[test]
fn test_upgraded_record_validates_against_its_new_version() {
    let manager = VersionManager::new();
    let legacy = Record::new()
        .with("id", "123")
        .with("name", "Juan Pérez")
        .with("created_at", "2024-01-01T10:00:00");

    assert!(manager.validate_schema(&legacy, None).is_valid());
    assert!(!manager.validate_schema(&legacy, Some(3)).is_valid());

    let upgraded = manager.upgrade_data(legacy.clone(), 3);
    let outcome = manager.validate_schema(&upgraded, None);
    assert!(outcome.is_valid());
    assert_eq!(outcome.version(), Some(3));

    // the clone passed in left the original untouched
    assert_eq!(legacy.version().unwrap(), 1);
    assert!(!legacy.contains("email"));
}

#[test]
fn test_unknown_version_is_a_distinct_outcome() {
    let manager = VersionManager::new();
    let outcome = manager.validate_schema(&Record::new(), Some(99));
    assert!(matches!(
        outcome,
        ValidationOutcome::UnsupportedVersion { version: 99 }
    ));
}

#[test]
fn test_malformed_tag_never_rewrites_data() {
    let manager = VersionManager::new();
    let record = Record::new()
        .with("id", "1")
        .with("name", "A")
        .with("created_at", "2024-01-01")
        .with("email", "a@x.com")
        .with("updated_at", "2024-05-05")
        .with("phone", "555")
        .with(VERSION_FIELD, "3");

    assert_eq!(manager.upgrade_data(record.clone(), 3), record);
    assert!(manager.upgrade_data_strict(record.clone(), 3).is_err());
    assert!(matches!(
        manager.validate_schema(&record, None),
        ValidationOutcome::InvalidVersionTag { .. }
    ));
}

#[test]
fn test_script_lookup() {
    let manager = VersionManager::new();
    let script = manager.create_migration_script(1, 2);
    assert!(script.contains("ALTER TABLE users ADD COLUMN email VARCHAR(255);"));
    assert!(script.contains("ALTER TABLE users ADD COLUMN updated_at TIMESTAMP;"));

    assert_eq!(
        manager.create_migration_script(1, 3),
        "-- No migration script available for 1 → 3"
    );
}

#[test]
fn test_manager_shared_across_threads() {
    let manager = VersionManager::new();
    std::thread::scope(|scope| {
        for i in 0..4 {
            let manager = &manager;
            scope.spawn(move || {
                let record = Record::new().with("id", i.to_string()).with("created_at", "x");
                let upgraded = manager.upgrade_data(record, 3);
                assert_eq!(upgraded.version().unwrap(), 3);
            });
        }
    });
}
