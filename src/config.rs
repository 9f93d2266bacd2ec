//! Logger configuration.
//!
//! Everything can be set in code through [`WryteConfig`]; the `WRYTE_*`
//! environment variables below are a convenience for command-line tools and
//! services. There is no configuration file support.

use crate::error::{Result, WryteError};
use crate::level::Severity;
use tracing::warn;

/// Logger name.
pub const WRYTE_NAME_ENV: &str = "WRYTE_NAME";

/// Hostname override; the system hostname is used when unset.
pub const WRYTE_HOSTNAME_ENV: &str = "WRYTE_HOSTNAME";

/// Minimum severity of the default handler.
pub const WRYTE_LEVEL_ENV: &str = "WRYTE_LEVEL";

/// When true, the default handler emits JSON instead of console text.
pub const WRYTE_JSON_ENV: &str = "WRYTE_JSON";

/// Pretty JSON / `key=value` console output.
pub const WRYTE_PRETTY_ENV: &str = "WRYTE_PRETTY";

/// Filter for the crate's own diagnostics, in `tracing_subscriber::EnvFilter`
/// syntax.
pub const WRYTE_LOG_ENV: &str = "WRYTE_LOG";

/// Standard switch disabling ANSI colors when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Name used when none is configured.
pub const DEFAULT_NAME: &str = "wryte";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Construction options for [`crate::Wryte`].
///
/// **Fields**
/// - `name`: logger name stamped on every record.
/// - `hostname`: host stamped on every record; detected when `None`.
/// - `level`: minimum severity of the default handler.
/// - `pretty`: `Some(true)` for indented JSON, `Some(false)` for a JSON block
///   of extras in console mode. `None` keeps each formatter's default
///   (compact JSON, `key=value` console lines).
/// - `bare`: if `true`, no default handler is added.
/// - `jsonify`: default handler emits JSON instead of console text.
/// - `color`: colorize console output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WryteConfig {
    pub name: String,
    pub hostname: Option<String>,
    pub level: Severity,
    pub pretty: Option<bool>,
    pub bare: bool,
    pub jsonify: bool,
    pub color: bool,
}

impl Default for WryteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            hostname: None,
            level: Severity::Info,
            pretty: None,
            bare: false,
            jsonify: false,
            color: true,
        }
    }
}

impl WryteConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Config without a default handler.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            bare: true,
            ..Self::new(name)
        }
    }

    /// Overlay the `WRYTE_*` environment variables on the defaults.
    ///
    /// Fails on the first variable holding an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), true)
    }

    /// Like [`WryteConfig::from_env`], but invalid values are reported as
    /// warnings and leave the default in place.
    pub fn from_env_lenient() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok(), false);
        config.unwrap_or_default()
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, strict: bool) -> Result<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup(WRYTE_NAME_ENV).filter(|v| !v.is_empty()) {
            config.name = name;
        }
        config.hostname = lookup(WRYTE_HOSTNAME_ENV).filter(|v| !v.is_empty());
        if let Some(level) = lookup(WRYTE_LEVEL_ENV) {
            if let Some(level) = settle(level.parse::<Severity>(), strict)? {
                config.level = level;
            }
        }
        if let Some(value) = lookup(WRYTE_JSON_ENV) {
            if let Some(jsonify) = settle(parse_bool(WRYTE_JSON_ENV, &value), strict)? {
                config.jsonify = jsonify;
            }
        }
        if let Some(value) = lookup(WRYTE_PRETTY_ENV) {
            if let Some(pretty) = settle(parse_bool(WRYTE_PRETTY_ENV, &value), strict)? {
                config.pretty = Some(pretty);
            }
        }
        config.color = lookup(NO_COLOR_ENV).map_or(true, |v| v.is_empty());
        Ok(config)
    }
}

/// Propagate `result` when `strict`, otherwise warn and skip the value.
fn settle<T>(result: Result<T>, strict: bool) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("ignoring environment setting: {}", e);
            Ok(None)
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(WryteError::InvalidEnv {
            key,
            value: value.to_string(),
        }),
    }
}
