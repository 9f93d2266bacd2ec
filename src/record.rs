use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field holding the logger name.
pub const NAME: &str = "name";
/// Field holding the host the record was produced on.
pub const HOSTNAME: &str = "hostname";
/// Field holding the producing process id.
pub const PID: &str = "pid";
/// Field holding the ISO-8601 creation time.
pub const TIMESTAMP: &str = "timestamp";
/// Field holding the upper-case severity name.
pub const LEVEL: &str = "level";
/// Field holding the human message.
pub const MESSAGE: &str = "message";
/// Field that replaces context objects which could not be parsed.
pub const BAD_OBJECT: &str = "_bad_object";

/// A fully merged log record: a flat mapping of field names to JSON values.
///
/// Records are produced by [`crate::enrich::enrich`] and are read-only
/// afterwards; formatters receive them by reference. Fields keep the order
/// they were first set in, so context objects appear in call order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String form of a field; strings are returned unquoted, other values
    /// as JSON text.
    pub fn get_display(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(display_value)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Render a JSON value the way it should appear inside human-readable text.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One caller-supplied bag of extra fields.
///
/// Either an already structured map or a string that still has to be
/// parsed (a JSON object or a single `key=value` pair).
#[derive(Debug, Clone, PartialEq)]
pub enum ContextObject {
    Fields(Map<String, Value>),
    Text(String),
}

impl From<Map<String, Value>> for ContextObject {
    fn from(map: Map<String, Value>) -> Self {
        ContextObject::Fields(map)
    }
}

impl From<BTreeMap<String, Value>> for ContextObject {
    fn from(map: BTreeMap<String, Value>) -> Self {
        ContextObject::Fields(map.into_iter().collect())
    }
}

impl From<&str> for ContextObject {
    fn from(text: &str) -> Self {
        ContextObject::Text(text.to_string())
    }
}

impl From<String> for ContextObject {
    fn from(text: String) -> Self {
        ContextObject::Text(text)
    }
}

impl From<Value> for ContextObject {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ContextObject::Fields(map),
            Value::String(text) => ContextObject::Text(text),
            other => ContextObject::Text(other.to_string()),
        }
    }
}
