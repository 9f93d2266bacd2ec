use std::error::Error;
use tracing::{debug, error, info, warn};

use crate::level::Severity;
use crate::sink::LogSink;

/// Sink that re-emits formatted records as `tracing` events.
///
/// Lets the facade sit on top of an application's existing subscriber.
/// `critical` has no `tracing` counterpart and is emitted at `ERROR` with
/// `critical = true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: Severity, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        match level {
            Severity::Debug => debug!(target: "wryte", "{}", line),
            Severity::Info => info!(target: "wryte", "{}", line),
            Severity::Warning => warn!(target: "wryte", "{}", line),
            Severity::Error => error!(target: "wryte", "{}", line),
            Severity::Critical => error!(target: "wryte", critical = true, "{}", line),
        }
        Ok(())
    }
}
