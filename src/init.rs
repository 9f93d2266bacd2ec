use tracing_subscriber::EnvFilter;

use crate::config::{env_or, WRYTE_LOG_ENV};

/// Install a global `tracing` subscriber for the crate's own diagnostics
/// (handler changes, sink failures, hostname fallback).
///
/// **Parameters**
/// - `default_filter`: filter used when `WRYTE_LOG` is unset, in
///   [`EnvFilter`] syntax (e.g. `"warn"` or `"wryte=debug"`).
///
/// **Effects**
///
/// Diagnostics are written to stderr so they never mix with records
/// written to stdout. Returns `false` if a global subscriber was already
/// installed, in which case that subscriber keeps receiving diagnostics.
pub fn init_diagnostics(default_filter: &str) -> bool {
    let filter = EnvFilter::try_new(env_or(WRYTE_LOG_ENV, default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
