use parking_lot::Mutex;
use std::error::Error;

use crate::level::Severity;
use crate::sink::LogSink;

/// Sink that keeps every formatted record in memory.
///
/// Handy for embedding the logger in tools that post-process output, and
/// for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted records written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// Formatted records with the severity they were written at.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: Severity, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.lock().push((level, line.to_string()));
        Ok(())
    }
}
