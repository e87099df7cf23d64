//! Domain primitives shared by the catalog, the API and the views.
//!
//! Episode identifiers arrive from the stream files as arbitrary JSON (most
//! of them numbers, some strings), so [`EpisodeId`] keeps the raw value and
//! only defines how it is rendered and compared.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier of an aggregated episode, taken from `decoded_data.id`.
///
/// Serializes exactly like the value it wraps, so `42` stays a number and
/// `"abc"` stays a string in API responses.
///
/// # Examples
///
/// ```rust
/// use anistream::domain::EpisodeId;
///
/// let id = EpisodeId::new(serde_json::json!(42));
/// assert_eq!(id.as_lookup_key().as_deref(), Some("42"));
/// assert!(id.matches("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(Value);

impl EpisodeId {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped JSON value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Returns `true` when the record carried no usable id.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }

    /// String form used when matching a request identifier.
    ///
    /// Strings are used verbatim, numbers and booleans use their JSON
    /// rendering. `null`, arrays and objects have no lookup key.
    #[must_use]
    pub fn as_lookup_key(&self) -> Option<String> {
        match &self.0 {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Exact comparison of `identifier` against the lookup key.
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        match &self.0 {
            Value::String(s) => s == identifier,
            _ => self.as_lookup_key().is_some_and(|key| key == identifier),
        }
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_lookup_key() {
            Some(key) => f.write_str(&key),
            None => Ok(()),
        }
    }
}

impl From<Value> for EpisodeId {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
