use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use wryte::noop_sink::NoopSink;
use wryte::{FormatterKind, Wryte};

fn main() -> wryte::Result<()> {
    let log = Wryte::bare("load");
    log.add_handler(Arc::new(NoopSink), Some("json"), FormatterKind::Json, "info")?;
    log.add_handler(Arc::new(NoopSink), Some("console"), FormatterKind::Console, "error")?;

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        log.error(
            "load test error",
            &[json!({"iteration": i}).into(), "stage=load".into()],
        );
    }

    let elapsed = start.elapsed();
    println!(
        "sent {} records in {:?} (~{:.0} rec/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
