use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{self, SchemaRegistry};
use crate::upgrade::Upgrader;
use crate::validate::{self, ValidationOutcome};

/// Registry, validator, upgrader and migration scripts behind one handle.
///
/// Built once and never mutated, so a `&VersionManager` can be shared
/// across threads freely.
#[derive(Debug, Clone, Default)]
pub struct VersionManager {
    registry: SchemaRegistry,
    upgrader: Upgrader,
}

impl VersionManager {
    /// A manager over the built-in `users` schema revisions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(SchemaRegistry::builtin(), Upgrader::builtin())
    }

    #[must_use]
    pub fn with_parts(registry: SchemaRegistry, upgrader: Upgrader) -> Self {
        Self { registry, upgrader }
    }

    /// Read-only view of the registered revisions.
    #[must_use]
    pub const fn schemas(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validate against `version`, or the record's own tag (default 1).
    pub fn validate_schema(&self, record: &Record, version: Option<u32>) -> ValidationOutcome {
        validate::validate(&self.registry, record, version)
    }

    /// Upgrade `record` to `target`, passing through versions with no step.
    #[must_use]
    pub fn upgrade_data(&self, record: Record, target: u32) -> Record {
        self.upgrader.upgrade(record, target)
    }

    /// Upgrade `record` to `target`, failing on versions with no step.
    pub fn upgrade_data_strict(&self, record: Record, target: u32) -> Result<Record> {
        self.upgrader.upgrade_strict(record, target)
    }

    /// Upgrade `record` to the newest registered revision.
    pub fn upgrade_to_latest(&self, record: Record) -> Result<Record> {
        let latest = self.registry.latest().ok_or(Error::NoRevisions)?;
        Ok(self.upgrade_data(record, latest))
    }

    /// SQL for the adjacent pair `from → to`, or a placeholder comment.
    pub fn create_migration_script(&self, from: u32, to: u32) -> Cow<'static, str> {
        schema::migration_script(from, to)
    }

    /// One script per hop from `from` up to `to`.
    pub fn migration_plan(&self, from: u32, to: u32) -> Vec<Cow<'static, str>> {
        schema::migration_plan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRevision;
    use serde_json::Value;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_manager_is_shareable() {
        assert_send_sync::<VersionManager>();
    }

    #[test]
    fn test_schemas_accessor() {
        let manager = VersionManager::new();
        assert_eq!(manager.schemas().latest(), Some(3));
        assert!(manager.schemas().get(1).unwrap().requires("created_at"));
    }

    #[test]
    fn test_upgrade_to_latest() {
        let manager = VersionManager::new();
        let record = manager
            .upgrade_to_latest(Record::new().with("created_at", "2024-01-01"))
            .unwrap();
        assert_eq!(record.version().unwrap(), 3);
        assert_eq!(record.get("phone"), Some(&Value::Null));
    }

    #[test]
    fn test_upgrade_to_latest_with_empty_registry() {
        let manager = VersionManager::with_parts(
            SchemaRegistry::from_revisions(Vec::<SchemaRevision>::new()),
            Upgrader::empty(),
        );
        let err = manager.upgrade_to_latest(Record::new()).unwrap_err();
        assert!(matches!(err, Error::NoRevisions));
        assert_eq!(err.to_string(), "no schema revisions are registered");
    }

    #[test]
    fn test_create_migration_script_delegates() {
        let manager = VersionManager::new();
        assert!(manager.create_migration_script(2, 3).contains("phone"));
        assert_eq!(manager.migration_plan(1, 3).len(), 2);
    }
}
