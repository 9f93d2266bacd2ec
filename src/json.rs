use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::formatter::RecordFormatter;
use crate::record::LogRecord;

/// Formats each record as a single JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        to_json(record, self.pretty)
    }
}

/// Serialize compactly, or indented by four spaces when `pretty`.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    if !pretty {
        return serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    }

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    // Maps of JSON values keyed by strings always serialize.
    if value.serialize(&mut ser).is_err() {
        return "{}".to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
