use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::color::color_provider;
use crate::console::ConsoleFormatter;
use crate::error::WryteError;
use crate::json::JsonFormatter;
use crate::record::LogRecord;

/// Turns a [`LogRecord`] into the text written by a sink.
pub trait RecordFormatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> String;
}

/// Built-in formatters a handler can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    Json,
    Console,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Json => "json",
            FormatterKind::Console => "console",
        }
    }

    /// Build the formatter.
    ///
    /// An unset `pretty` means compact JSON and `key=value` console lines.
    pub fn build(&self, pretty: Option<bool>, color: bool) -> Arc<dyn RecordFormatter> {
        match self {
            FormatterKind::Json => Arc::new(JsonFormatter::new(pretty.unwrap_or(false))),
            FormatterKind::Console => Arc::new(ConsoleFormatter::new(
                pretty.unwrap_or(true),
                color_provider(color),
            )),
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatterKind {
    type Err = WryteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(FormatterKind::Json),
            "console" => Ok(FormatterKind::Console),
            _ => Err(WryteError::InvalidFormatter(s.to_string())),
        }
    }
}
