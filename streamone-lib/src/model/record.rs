//! Dynamic record type for API responses

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// A dynamic record returned by list and get endpoints.
///
/// ION resources are schemaless JSON objects; `Record` wraps the object and
/// provides typed accessors for the common cases. The full value is always
/// available via [`Record::get`] or [`Record::into_value`].
///
/// # Example
///
/// ```
/// use streamone_lib::model::Record;
///
/// let record: Record = serde_json::from_str(
///     r#"{"name": "accounts/1/customers/42", "customerName": "Contoso"}"#,
/// ).unwrap();
///
/// assert_eq!(record.get_str("customerName"), Some("Contoso"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a string field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns an integer field, if present and an integer.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(Value::as_i64)
    }

    /// Returns a boolean field, if present and a boolean.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.fields.get(field).and_then(Value::as_bool)
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the resource id.
    ///
    /// Prefers an explicit `id` field, falling back to the trailing segment
    /// of the resource `name` (`accounts/1/customers/42` -> `42`).
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
            .or_else(|| self.get_str("name").and_then(|n| n.rsplit('/').next()))
    }

    /// Sets a field value, replacing any existing value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Consumes the record and returns the underlying JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Derives and stores an `id` field from the resource `name`.
    ///
    /// Customer and product resources carry their id only as the trailing
    /// segment of `name`; this exposes it as a plain `id` field.
    pub(crate) fn with_derived_id(mut self) -> Self {
        if !self.fields.contains_key("id")
            && let Some(id) = self
                .fields
                .get("name")
                .and_then(Value::as_str)
                .and_then(|n| n.rsplit('/').next())
        {
            let id = id.to_string();
            self.fields.insert("id".to_string(), Value::String(id));
        }
        self
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_id_from_name() {
        let record: Record =
            serde_json::from_str(r#"{"name": "accounts/1/customers/42"}"#).unwrap();
        let record = record.with_derived_id();
        assert_eq!(record.get_str("id"), Some("42"));
        assert_eq!(record.id(), Some("42"));
    }

    #[test]
    fn test_explicit_id_wins() {
        let record: Record =
            serde_json::from_str(r#"{"id": "abc", "name": "accounts/1/customers/42"}"#).unwrap();
        let record = record.with_derived_id();
        assert_eq!(record.id(), Some("abc"));
    }
}
