//! Checking records against a schema revision.
//!
//! Validation never fails with an error. An unknown version produces
//! [`ValidationOutcome::UnsupportedVersion`]; otherwise the outcome is a
//! [`ValidationReport`] listing every problem found, in a fixed order:
//! missing fields in the revision's declared field order, then type
//! mismatches in the revision's type-table order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::record::Record;
use crate::schema::{FieldType, SchemaRegistry};

/// A single problem found while checking a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    /// A required field is absent.
    Missing { field: String },
    /// A non-null value has the wrong primitive type.
    WrongType { field: String, expected: FieldType },
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::WrongType { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing field: {}", field),
            Self::WrongType { field, expected } => {
                write!(f, "wrong type for {}: expected {}", field, expected)
            }
        }
    }
}

/// Result of checking a record against a known revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub version: u32,
    pub errors: Vec<FieldError>,
}

/// Either the record was checked, or the version was unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    UnsupportedVersion { version: u32 },
    /// The record's own `schema_version` tag could not be read as a version.
    InvalidVersionTag { tag: Value },
    Checked(ValidationReport),
}

impl ValidationOutcome {
    /// True only for a checked record with no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Checked(report) if report.valid)
    }

    /// The version that was resolved for the check, if one could be.
    #[must_use]
    pub fn version(&self) -> Option<u32> {
        match self {
            Self::UnsupportedVersion { version } => Some(*version),
            Self::InvalidVersionTag { .. } => None,
            Self::Checked(report) => Some(report.version),
        }
    }

    /// Field errors; empty unless the record was checked.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::UnsupportedVersion { .. } | Self::InvalidVersionTag { .. } => &[],
            Self::Checked(report) => &report.errors,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::UnsupportedVersion { .. } | Self::InvalidVersionTag { .. } => None,
            Self::Checked(report) => Some(report),
        }
    }
}

/// Check `record` against `version`, or against the record's own tag when
/// `version` is `None`.
///
/// An explicit `version` takes precedence, so a malformed tag only matters
/// when the version is read from the record.
pub fn validate(
    registry: &SchemaRegistry,
    record: &Record,
    version: Option<u32>,
) -> ValidationOutcome {
    let version = match version.map_or_else(|| record.resolve_version(), Ok) {
        Ok(version) => version,
        Err(tag) => {
            log::debug!("Validation requested for record with malformed tag {}", tag);
            return ValidationOutcome::InvalidVersionTag { tag: tag.clone() };
        }
    };

    let Some(revision) = registry.get(version) else {
        log::debug!("Validation requested for unsupported version {}", version);
        return ValidationOutcome::UnsupportedVersion { version };
    };

    let mut errors = Vec::new();

    for field in &revision.required {
        if !record.contains(field) {
            errors.push(FieldError::Missing {
                field: field.clone(),
            });
        }
    }

    for (field, expected) in &revision.types {
        match record.get(field) {
            Some(value) if !value.is_null() && !expected.matches(value) => {
                errors.push(FieldError::WrongType {
                    field: field.clone(),
                    expected: *expected,
                });
            }
            _ => {}
        }
    }

    log::debug!(
        "Validated record against version {}: {} error(s)",
        version,
        errors.len()
    );

    ValidationOutcome::Checked(ValidationReport {
        valid: errors.is_empty(),
        version,
        errors,
    })
}
