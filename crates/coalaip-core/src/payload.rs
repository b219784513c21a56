//! # Entity Field Payloads
//!
//! Defines [`Payload`], the mapping of field names to values that becomes
//! the "data" portion of one entity instance (a Creation, Work,
//! Manifestation, Right, or Copyright).
//!
//! ## Capability Contract
//!
//! Validators depend on exactly three capabilities of a payload:
//!
//! 1. Membership test — [`Payload::contains_key`].
//! 2. Key-set retrieval — [`Payload::keys`].
//! 3. Indexed read — [`Payload::get`] / [`Payload::get_str`].
//!
//! Payloads are passed to validators by reference for inspection only and
//! are never mutated by them. Key order is irrelevant.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The field mapping of one entity instance.
///
/// A thin wrapper over `serde_json::Map<String, Value>` exposing the
/// capability set validators rely on. Construction happens caller-side,
/// immediately before entity construction; validation never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Whether the payload contains the given field.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Read a field value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read a field value as a text string.
    ///
    /// Returns `None` both when the field is absent and when it holds any
    /// non-string value (`null`, numbers, booleans, objects, arrays). The
    /// two cases are distinguishable via [`Payload::get`] when an error
    /// message needs the offending value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Iterate over the field names of this payload.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Set a field value, returning the previous value if any.
    ///
    /// Used by callers assembling a payload; validators never call this.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Number of fields in the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the underlying JSON object map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Payload {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A payload is a JSON object. Any other JSON value is handed back to the
/// caller unchanged.
impl TryFrom<Value> for Payload {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
