//! Forward-only record upgrades.
//!
//! An upgrade walks a record from its current version to a target one
//! step at a time. Each step moves exactly one version forward and the
//! record's version tag is stamped after every step, so no version is
//! ever skipped.
//!
//! Upgrades take the record by value and hand back the upgraded value.
//! To keep the original, clone it before upgrading:
//!
//! ```
//! use schemaver_core::{Record, Upgrader};
//!
//! let original = Record::new().with("id", "1").with("created_at", "2024-01-01");
//! let upgraded = Upgrader::builtin().upgrade(original.clone(), 2);
//!
//! assert_eq!(original.version().unwrap(), 1);
//! assert_eq!(upgraded.version().unwrap(), 2);
//! ```

use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::record::Record;

/// Moves a record from version `n` to `n + 1`.
///
/// The step does not need to stamp the version tag; the upgrader does.
pub type UpgradeStep = fn(Record) -> Record;

/// V1 → V2: add `email` (null) and `updated_at` (a copy of `created_at`).
fn add_email_and_updated_at(mut record: Record) -> Record {
    let created_at = record.get("created_at").cloned().unwrap_or(Value::Null);
    record.insert("email", Value::Null);
    record.insert("updated_at", created_at);
    record
}

/// V2 → V3: add `phone` (null).
fn add_phone(mut record: Record) -> Record {
    record.insert("phone", Value::Null);
    record
}

/// Registered upgrade steps, keyed by source version.
#[derive(Debug, Clone)]
pub struct Upgrader {
    steps: BTreeMap<u32, UpgradeStep>,
}

impl Upgrader {
    /// An upgrader with no steps; every hop passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    /// The steps matching [`crate::schema::SchemaRegistry::builtin`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_step(1, add_email_and_updated_at)
            .with_step(2, add_phone)
    }

    /// Register the step that upgrades `from` to `from + 1`.
    #[must_use]
    pub fn with_step(mut self, from: u32, step: UpgradeStep) -> Self {
        self.steps.insert(from, step);
        self
    }

    #[must_use]
    pub fn has_step(&self, from: u32) -> bool {
        self.steps.contains_key(&from)
    }

    /// Upgrade `record` to `target`.
    ///
    /// Returns the record untouched when it is already at or past
    /// `target`, or when its version tag is malformed. Versions with no
    /// registered step are passed through: only the version tag advances.
    #[must_use]
    pub fn upgrade(&self, record: Record, target: u32) -> Record {
        match record.version() {
            Ok(current) => self.apply_steps(record, current, target),
            Err(err) => {
                log::warn!("Leaving record unchanged: {}", err);
                record
            }
        }
    }

    /// Like [`Upgrader::upgrade`], but fails on a malformed version tag or
    /// on a version with no step.
    ///
    /// The checks happen before any step runs, so on error no work is
    /// lost: the input was consumed but nothing was half-applied.
    pub fn upgrade_strict(&self, record: Record, target: u32) -> Result<Record> {
        let current = record.version()?;
        if let Some(from) = (current..target).find(|v| !self.has_step(*v)) {
            return Err(Error::MissingMigrationStep { from });
        }
        Ok(self.apply_steps(record, current, target))
    }

    fn apply_steps(&self, mut record: Record, mut current: u32, target: u32) -> Record {
        let last_step = self.steps.keys().next_back().copied();

        while current < target {
            if !last_step.is_some_and(|last| current <= last) {
                // Nothing left but pass-through hops.
                log::debug!(
                    "No upgrade steps from version {} on, advancing tag to {}",
                    current,
                    target
                );
                record.set_version(target);
                break;
            }

            record = match self.steps.get(&current) {
                Some(step) => {
                    log::debug!("Upgrading record from version {} to {}", current, current + 1);
                    step(record)
                }
                None => {
                    log::debug!(
                        "No upgrade step from version {}, advancing tag only",
                        current
                    );
                    record
                }
            };
            current += 1;
            record.set_version(current);
        }

        record
    }
}

impl Default for Upgrader {
    fn default() -> Self {
        Self::builtin()
    }
}
