//! Structured logging facade.
//!
//! A [`Wryte`] logger merges its identity (name, hostname, pid), any number
//! of context objects (maps, JSON strings or `key=value` pairs) and the
//! message into one flat [`LogRecord`], then hands it to named handlers that
//! format it as JSON or colorized console text and write it to a
//! [`LogSink`].

pub mod color;
pub mod config;
pub mod console;
pub mod enrich;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod hostname;
pub mod init;
pub mod json;
pub mod level;
pub mod logger;
pub mod memory;
pub mod noop_sink;
pub mod normalize;
pub mod record;
pub mod sink;
pub mod stream;
pub mod tracing_sink;

pub use config::WryteConfig;
pub use error::{Result, WryteError};
pub use formatter::{FormatterKind, RecordFormatter};
pub use level::Severity;
pub use logger::Wryte;
pub use record::{ContextObject, LogRecord};
pub use sink::LogSink;
