use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hostname::get_hostname;
use crate::level::Severity;
use crate::normalize::normalize_objects;
use crate::record::{ContextObject, LogRecord, HOSTNAME, LEVEL, MESSAGE, NAME, PID, TIMESTAMP};

/// Fields describing the producing process, stamped on every record.
///
/// Computed once per logger and copied into each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityBase {
    pub name: String,
    pub hostname: String,
    pub pid: u32,
}

impl IdentityBase {
    pub fn new(name: impl Into<String>, hostname: impl Into<String>, pid: u32) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            pid,
        }
    }

    /// Build the identity for the current process, looking up the hostname
    /// when one isn't provided.
    pub fn detect(name: impl Into<String>, hostname: Option<String>) -> Self {
        Self::new(
            name,
            hostname.unwrap_or_else(get_hostname),
            std::process::id(),
        )
    }

    fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(NAME.to_string(), Value::String(self.name.clone()));
        fields.insert(HOSTNAME.to_string(), Value::String(self.hostname.clone()));
        fields.insert(PID.to_string(), Value::from(self.pid));
        fields
    }
}

/// Current local time in ISO-8601 with microsecond precision,
/// e.g. `2017-12-22T17:02:59.550920`.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Build a record from the identity, the context objects and the message.
///
/// Precedence, lowest first: identity fields, context objects in call
/// order, then `message`, `level` and `timestamp`.
///
/// Example: given `"MESSAGE"`, [`Severity::Info`] and
/// `["{\"key1\":\"value1\"}", "key2=value2"]` returns
///
/// ```text
/// {
///     "timestamp": "2017-12-22T17:02:59.550920",
///     "level": "INFO",
///     "message": "MESSAGE",
///     "key1": "value1",
///     "key2": "value2",
///     "name": "my-logger-name",
///     "hostname": "my-host",
///     "pid": 51223
/// }
/// ```
pub fn enrich(
    base: &IdentityBase,
    message: &str,
    level: Severity,
    objects: &[ContextObject],
) -> LogRecord {
    enrich_at(base, message, level, objects, timestamp_now())
}

/// Same as [`enrich`] with a caller-supplied timestamp.
pub fn enrich_at(
    base: &IdentityBase,
    message: &str,
    level: Severity,
    objects: &[ContextObject],
    timestamp: String,
) -> LogRecord {
    let mut fields = base.to_fields();
    for part in normalize_objects(objects) {
        fields.extend(part);
    }
    fields.insert(MESSAGE.to_string(), Value::String(message.to_string()));
    fields.insert(LEVEL.to_string(), Value::String(level.label().to_string()));
    fields.insert(TIMESTAMP.to_string(), Value::String(timestamp));
    LogRecord::from_fields(fields)
}
