use std::error::Error;

use crate::level::Severity;

/// Destination for formatted log lines.
///
/// A sink receives the text produced by a handler's formatter together
/// with the record severity. Severity filtering happens in the handler
/// before a sink is called, so implementations only deal with output.
pub trait LogSink: Send + Sync {
    /// Write a single formatted record.
    ///
    /// **Parameters**
    /// - `level`: severity of the record, for sinks that route by level.
    /// - `line`: formatted record, without a trailing newline.
    ///
    /// **Returns**
    /// - `Ok(())` once the write was attempted successfully.
    /// - `Err(..)` if the underlying writer failed. The logger reports the
    ///   failure and carries on; writes are never retried.
    fn write(&self, level: Severity, line: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Flush any buffered output.
    ///
    /// Default implementation is a no-op.
    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
