/// Errors returned by the logging facade.
///
/// Only configuration mistakes are surfaced to callers. Bad context
/// objects and sink failures never abort a logging call.
#[derive(thiserror::Error, Debug)]
pub enum WryteError {
    #[error("level must be one of debug, info, warning, warn, error, critical (got `{0}`)")]
    InvalidLevel(String),

    #[error("formatter must be one of console, json (got `{0}`)")]
    InvalidFormatter(String),

    #[error("invalid value for environment variable {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, WryteError>;
