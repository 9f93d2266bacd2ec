use std::error::Error;
use std::sync::Arc;

use wryte::{FormatterKind, LogSink, Severity, Wryte};

/// Example of plugging in a custom destination by implementing `LogSink`
/// directly. Imagine this talks to some in-house collector; here it just
/// prefixes each line with its severity.
struct PrefixSink;

impl LogSink for PrefixSink {
    fn write(&self, level: Severity, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("[collector:{}] {}", level, line);
        Ok(())
    }
}

fn main() -> wryte::Result<()> {
    let log = Wryte::bare("custom-sink");
    log.add_handler(Arc::new(PrefixSink), Some("collector"), FormatterKind::Json, "debug")?;

    log.info("custom sink example started", &[]);
    log.error("simulated failure", &["db=my-custom-db".into()]);
    Ok(())
}
