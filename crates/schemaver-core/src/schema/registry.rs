//! Numbered schema revisions and the registry that holds them.
//!
//! A [`SchemaRevision`] lists the fields a record must carry at that
//! version and the primitive type each field must have when it is not
//! null. The [`SchemaRegistry`] maps version numbers to revisions. It is
//! built once and never mutated afterwards, so a shared reference can be
//! handed to any number of readers.
//!
//! # Example
//!
//! ```
//! use schemaver_core::schema::{FieldType, SchemaRegistry};
//!
//! let registry = SchemaRegistry::builtin();
//! let v2 = registry.get(2).unwrap();
//! assert!(v2.requires("email"));
//! assert_eq!(v2.type_of("email"), Some(FieldType::Text));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// The primitive type a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A JSON string.
    Text,
    /// A JSON number with no fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
}

impl FieldType {
    /// Whether a non-null value satisfies this type.
    ///
    /// Null is never passed here: the validator skips null values.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Revisions
// ---------------------------------------------------------------------------

/// One numbered revision of the record schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRevision {
    pub version: u32,

    /// Required field names, in declared order.
    pub required: Vec<String>,

    /// Expected type per field, in declared order.
    pub types: Vec<(String, FieldType)>,
}

impl SchemaRevision {
    #[must_use]
    pub fn new(version: u32) -> Self {
        Self {
            version,
            required: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Add a required field with its expected type.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.types.push((name, field_type));
        self
    }

    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|field| field == name)
    }

    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<FieldType> {
        self.types
            .iter()
            .find(|(field, _)| field == name)
            .map(|&(_, field_type)| field_type)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Version number to revision table.
///
/// Versions are expected to form a dense sequence starting at 1. Adding a
/// version means adding a revision here and an upgrade step in
/// [`crate::upgrade`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    revisions: BTreeMap<u32, SchemaRevision>,
}

impl SchemaRegistry {
    /// The revisions of the `users` record shipped with schemaver.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_revisions([
            SchemaRevision::new(1)
                .field("id", FieldType::Text)
                .field("name", FieldType::Text)
                .field("created_at", FieldType::Text),
            SchemaRevision::new(2)
                .field("id", FieldType::Text)
                .field("name", FieldType::Text)
                .field("email", FieldType::Text)
                .field("created_at", FieldType::Text)
                .field("updated_at", FieldType::Text),
            SchemaRevision::new(3)
                .field("id", FieldType::Text)
                .field("name", FieldType::Text)
                .field("email", FieldType::Text)
                .field("phone", FieldType::Text)
                .field("created_at", FieldType::Text)
                .field("updated_at", FieldType::Text),
        ])
    }

    /// Build a registry from arbitrary revisions. A later revision with the
    /// same version number replaces an earlier one.
    pub fn from_revisions(revisions: impl IntoIterator<Item = SchemaRevision>) -> Self {
        Self {
            revisions: revisions
                .into_iter()
                .map(|revision| (revision.version, revision))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, version: u32) -> Option<&SchemaRevision> {
        self.revisions.get(&version)
    }

    #[must_use]
    pub fn contains(&self, version: u32) -> bool {
        self.revisions.contains_key(&version)
    }

    /// Known versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.revisions.keys().copied()
    }

    /// The highest known version, if any.
    #[must_use]
    pub fn latest(&self) -> Option<u32> {
        self.revisions.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaRevision> {
        self.revisions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
