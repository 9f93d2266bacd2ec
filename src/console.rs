use serde_json::{Map, Value};
use std::sync::Arc;

use crate::color::{Color, ColorProvider, NoColor};
use crate::formatter::RecordFormatter;
use crate::json::to_json;
use crate::level::Severity;
use crate::record::{display_value, LogRecord, HOSTNAME, LEVEL, MESSAGE, NAME, PID, TIMESTAMP};

/// Fields printed in the head line, or never printed at all.
const HIDDEN_FIELDS: [&str; 6] = [NAME, TIMESTAMP, LEVEL, MESSAGE, HOSTNAME, PID];

/// Human-readable formatter.
///
/// Produces `"{timestamp} - {name} - {level} - {message}"`, followed by the
/// remaining fields either as indented `key=value` lines (`pretty`) or as a
/// single indented JSON block. `hostname` and `pid` are never printed.
#[derive(Clone)]
pub struct ConsoleFormatter {
    pretty: bool,
    colors: Arc<dyn ColorProvider>,
}

impl ConsoleFormatter {
    pub fn new(pretty: bool, colors: Arc<dyn ColorProvider>) -> Self {
        Self { pretty, colors }
    }

    pub fn plain(pretty: bool) -> Self {
        Self::new(pretty, Arc::new(NoColor))
    }
}

impl RecordFormatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord) -> String {
        // Missing positional fields render empty rather than failing.
        let field = |key: &str| record.get_display(key).unwrap_or_default();
        let mut name = field(NAME);
        let mut timestamp = field(TIMESTAMP);
        let mut level = field(LEVEL);
        let message = field(MESSAGE);

        // Filtered rather than removed so extras keep the record's order.
        let extras: Map<String, Value> = record
            .fields()
            .iter()
            .filter(|(key, _)| !HIDDEN_FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if self.colors.is_enabled() {
            if let Ok(severity) = level.parse::<Severity>() {
                level = self.colors.paint(&level, Color::for_severity(severity));
            }
            timestamp = self.colors.paint(&timestamp, Color::Green);
            name = self.colors.paint(&name, Color::Magenta);
        }

        let mut msg = format!("{} - {} - {} - {}", timestamp, name, level, message);
        if self.pretty {
            for (key, value) in &extras {
                msg.push_str(&format!("\n  {}={}", key, display_value(value)));
            }
        } else if !extras.is_empty() {
            msg.push('\n');
            msg.push_str(&to_json(&extras, true));
        }
        msg
    }
}
