//! Hostname detection.

use std::env;
use tracing::warn;

/// Get the system hostname.
///
/// Tries, in order:
/// 1. the system hostname (`gethostname(2)` on unix)
/// 2. the `HOSTNAME` / `COMPUTERNAME` environment variables
/// 3. the literal `"unknown"`
#[must_use]
pub fn get_hostname() -> String {
    if let Some(hostname) = system_hostname() {
        return hostname;
    }

    for key in ["HOSTNAME", "COMPUTERNAME"] {
        if let Ok(hostname) = env::var(key) {
            if !hostname.is_empty() {
                return hostname;
            }
        }
    }

    warn!("could not determine hostname, using 'unknown'");
    "unknown".to_string()
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    match nix::unistd::gethostname() {
        Ok(hostname) => hostname
            .to_str()
            .filter(|hostname| !hostname.is_empty())
            .map(str::to_string),
        Err(e) => {
            warn!("failed to get system hostname: {}", e);
            None
        }
    }
}

#[cfg(not(unix))]
fn system_hostname() -> Option<String> {
    None
}
