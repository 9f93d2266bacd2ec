use crate::level::Severity;
use crate::sink::LogSink;
use std::error::Error;

/// A sink that simply drops all records.
///
/// Useful for measuring the cost of enrichment and formatting without any
/// I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn write(&self, _level: Severity, _line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
