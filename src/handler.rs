use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::formatter::RecordFormatter;
use crate::level::Severity;
use crate::record::LogRecord;
use crate::sink::LogSink;

/// A named pairing of a sink, a formatter and a minimum severity.
///
/// Each binding filters on its own threshold, so adding a verbose handler
/// never makes the others more verbose.
#[derive(Clone)]
pub struct HandlerBinding {
    name: String,
    sink: Arc<dyn LogSink>,
    formatter: Arc<dyn RecordFormatter>,
    level: Severity,
}

impl HandlerBinding {
    pub fn new(
        name: impl Into<String>,
        sink: Arc<dyn LogSink>,
        formatter: Arc<dyn RecordFormatter>,
        level: Severity,
    ) -> Self {
        Self {
            name: name.into(),
            sink,
            formatter,
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Format and write `record` if `severity` passes this handler's
    /// threshold. Write failures are reported and swallowed.
    pub fn handle(&self, severity: Severity, record: &LogRecord) {
        if !self.enabled(severity) {
            return;
        }
        let line = self.formatter.format(record);
        if let Err(e) = self.sink.write(severity, &line) {
            warn!(handler = %self.name, "failed to write log record: {}", e);
        }
    }

    pub fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            warn!(handler = %self.name, "failed to flush log sink: {}", e);
        }
    }
}

impl fmt::Debug for HandlerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerBinding")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::{enrich, IdentityBase};
    use crate::json::JsonFormatter;
    use crate::memory::MemorySink;

    #[test]
    fn filters_below_threshold() {
        let sink = Arc::new(MemorySink::new());
        let binding = HandlerBinding::new("h", sink.clone(), Arc::new(JsonFormatter::new(false)), Severity::Warning);
        let base = IdentityBase::new("svc", "h1", 1);

        for severity in Severity::ALL {
            binding.handle(severity, &enrich(&base, "m", severity, &[]));
        }

        let levels: Vec<Severity> = sink.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(levels, vec![Severity::Warning, Severity::Error, Severity::Critical]);
    }
}
