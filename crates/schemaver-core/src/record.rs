use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Name of the field that carries a record's schema version.
pub const VERSION_FIELD: &str = "schema_version";

/// Version assumed for records that carry no version tag.
pub const DEFAULT_VERSION: u32 = 1;

/// A flat mapping of field names to JSON values.
///
/// Values are primitives or null. Nested and repeated values are stored
/// as-is but no schema describes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidRecord(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Parse a record from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// The record's schema version.
    ///
    /// An absent tag means [`DEFAULT_VERSION`]. A present tag must be a
    /// non-negative integral number fitting `u32` (`2` and `2.0` both
    /// resolve to 2); anything else, null included, is
    /// [`Error::InvalidVersionTag`].
    pub fn version(&self) -> Result<u32> {
        self.resolve_version()
            .map_err(|tag| Error::InvalidVersionTag(tag.clone()))
    }

    /// Like [`Record::version`], handing back the offending tag on failure.
    pub(crate) fn resolve_version(&self) -> std::result::Result<u32, &Value> {
        match self.fields.get(VERSION_FIELD) {
            None => Ok(DEFAULT_VERSION),
            Some(tag) => tag_to_version(tag).ok_or(tag),
        }
    }

    /// Whether the record carries an explicit version tag.
    #[must_use]
    pub fn has_version_tag(&self) -> bool {
        self.fields.contains_key(VERSION_FIELD)
    }

    pub fn set_version(&mut self, version: u32) {
        self.fields.insert(VERSION_FIELD.to_string(), Value::from(version));
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Whether the field is present, null or not.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Whether the field is present and explicitly null.
    #[must_use]
    pub fn is_null(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(Value::Null))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tag_to_version(tag: &Value) -> Option<u32> {
    if let Some(v) = tag.as_u64() {
        return u32::try_from(v).ok();
    }
    let v = tag.as_f64()?;
    (v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v)).then(|| v as u32)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
