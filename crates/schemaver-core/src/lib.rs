//! Core of schemaver.
//!
//! This crate defines the schema registry (numbered revisions with their
//! required fields and field types), the record type, the validator, the
//! forward-only upgrader, the migration script table, and the
//! [`VersionManager`] facade that ties them together. Nothing here does
//! I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod manager;
pub mod record;
pub mod schema;
pub mod upgrade;
pub mod validate;

pub use error::{Error, Result};
pub use manager::VersionManager;
pub use record::{Record, DEFAULT_VERSION, VERSION_FIELD};
pub use schema::{FieldType, Migration, SchemaRegistry, SchemaRevision};
pub use upgrade::{UpgradeStep, Upgrader};
pub use validate::{FieldError, ValidationOutcome, ValidationReport};
