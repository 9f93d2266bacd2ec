use parking_lot::Mutex;
use std::error::Error;
use std::io::{self, Write};

use crate::level::Severity;
use crate::sink::LogSink;

/// Sink writing newline-terminated records to any [`Write`] target.
///
/// The writer sits behind a mutex so that concurrent loggers never
/// interleave partial lines.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl StreamSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LogSink for StreamSink<W> {
    fn write(&self, _level: Severity, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.writer.lock().flush()?;
        Ok(())
    }
}
