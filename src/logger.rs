use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::WryteConfig;
use crate::enrich::{enrich, IdentityBase};
use crate::error::Result;
use crate::formatter::{FormatterKind, RecordFormatter};
use crate::handler::HandlerBinding;
use crate::level::Severity;
use crate::record::ContextObject;
use crate::sink::LogSink;
use crate::stream::StreamSink;

/// Name of the handler added by [`Wryte::add_default_console_handler`].
pub const DEFAULT_CONSOLE_HANDLER: &str = "_console";
/// Name of the handler added by [`Wryte::add_default_json_handler`].
pub const DEFAULT_JSON_HANDLER: &str = "_json";

/// Structured logger.
///
/// Every call merges the logger identity (name, hostname, pid), the given
/// context objects and the message into one [`LogRecord`](crate::record::LogRecord) and passes it to
/// each registered handler.
///
/// ```no_run
/// use wryte::{Wryte, WryteConfig};
///
/// let log = Wryte::new(WryteConfig::new("svc"));
/// log.info("started", &["env=prod".into(), r#"{"port": 8080}"#.into()]);
/// ```
pub struct Wryte {
    identity: IdentityBase,
    pretty: Option<bool>,
    color: bool,
    handlers: RwLock<Vec<HandlerBinding>>,
}

impl Wryte {
    /// Instantiate a logger.
    ///
    /// Unless `config.bare` is set, a default stdout handler is added: JSON
    /// when `config.jsonify`, console text otherwise. The hostname is looked
    /// up when the config doesn't provide one.
    pub fn new(config: WryteConfig) -> Self {
        let identity = IdentityBase::detect(config.name, config.hostname);
        let logger = Self {
            identity,
            pretty: config.pretty,
            color: config.color,
            handlers: RwLock::new(Vec::new()),
        };
        if !config.bare {
            if config.jsonify {
                logger.add_default_json_handler(config.level);
            } else {
                logger.add_default_console_handler(config.level);
            }
        }
        logger
    }

    /// Logger without any handler.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(WryteConfig::bare(name))
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn identity(&self) -> &IdentityBase {
        &self.identity
    }

    /// Add a handler using one of the built-in formatters.
    ///
    /// `level` is a severity name (`debug`, `info`, `warning`, `warn`,
    /// `error`, `critical`). A random name is generated when `name` is
    /// `None`. Returns the handler name.
    pub fn add_handler(
        &self,
        sink: Arc<dyn LogSink>,
        name: Option<&str>,
        formatter: FormatterKind,
        level: &str,
    ) -> Result<String> {
        let level: Severity = level.parse()?;
        let formatter = formatter.build(self.pretty, self.color);
        Ok(self.bind(sink, name, formatter, level))
    }

    /// Add a handler with a caller-provided formatter.
    pub fn add_handler_with_formatter(
        &self,
        sink: Arc<dyn LogSink>,
        name: Option<&str>,
        formatter: Arc<dyn RecordFormatter>,
        level: &str,
    ) -> Result<String> {
        let level: Severity = level.parse()?;
        Ok(self.bind(sink, name, formatter, level))
    }

    pub fn add_default_console_handler(&self, level: Severity) -> String {
        let formatter = FormatterKind::Console.build(self.pretty, self.color);
        self.bind(
            Arc::new(StreamSink::stdout()),
            Some(DEFAULT_CONSOLE_HANDLER),
            formatter,
            level,
        )
    }

    pub fn add_default_json_handler(&self, level: Severity) -> String {
        let formatter = FormatterKind::Json.build(self.pretty, self.color);
        self.bind(
            Arc::new(StreamSink::stdout()),
            Some(DEFAULT_JSON_HANDLER),
            formatter,
            level,
        )
    }

    fn bind(
        &self,
        sink: Arc<dyn LogSink>,
        name: Option<&str>,
        formatter: Arc<dyn RecordFormatter>,
        level: Severity,
    ) -> String {
        let name = name.map_or_else(|| Uuid::new_v4().to_string(), str::to_string);
        debug!(logger = %self.identity.name, handler = %name, %level, "adding handler");
        self.handlers
            .write()
            .push(HandlerBinding::new(name.clone(), sink, formatter, level));
        name
    }

    /// Names of the registered handlers, in registration order.
    pub fn list_handlers(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    /// Remove every handler registered under `name`. Unknown names are
    /// ignored.
    pub fn remove_handler(&self, name: &str) {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|h| h.name() != name);
        let removed = before - handlers.len();
        if removed > 0 {
            debug!(logger = %self.identity.name, handler = %name, removed, "removed handler");
        }
    }

    /// Lowest severity any handler accepts, `None` without handlers.
    pub fn threshold(&self) -> Option<Severity> {
        self.handlers.read().iter().map(HandlerBinding::level).min()
    }

    /// Whether a record at `level` would reach at least one handler.
    pub fn enabled(&self, level: Severity) -> bool {
        self.handlers.read().iter().any(|h| h.enabled(level))
    }

    pub fn log(&self, level: Severity, message: &str, objects: &[ContextObject]) {
        // Snapshot the bindings so sinks run without holding the lock.
        let handlers: Vec<HandlerBinding> = self
            .handlers
            .read()
            .iter()
            .filter(|h| h.enabled(level))
            .cloned()
            .collect();
        if handlers.is_empty() {
            return;
        }
        let record = enrich(&self.identity, message, level, objects);
        for handler in &handlers {
            handler.handle(level, &record);
        }
    }

    /// Log at a level given by name, e.g. from command-line input.
    pub fn log_named(&self, level: &str, message: &str, objects: &[ContextObject]) -> Result<()> {
        let level: Severity = level.parse()?;
        self.log(level, message, objects);
        Ok(())
    }

    pub fn debug(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Debug, message, objects);
    }

    pub fn info(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Info, message, objects);
    }

    pub fn warn(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Warning, message, objects);
    }

    pub fn warning(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Warning, message, objects);
    }

    pub fn error(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Error, message, objects);
    }

    pub fn critical(&self, message: &str, objects: &[ContextObject]) {
        self.log(Severity::Critical, message, objects);
    }

    /// Flush every handler's sink.
    pub fn flush(&self) {
        for handler in self.handlers.read().iter() {
            handler.flush();
        }
    }
}

impl std::fmt::Debug for Wryte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wryte")
            .field("identity", &self.identity)
            .field("handlers", &self.list_handlers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySink;

    #[test]
    fn non_bare_logger_has_one_default_handler() {
        let console = Wryte::new(WryteConfig::new("svc"));
        assert_eq!(console.list_handlers(), vec![DEFAULT_CONSOLE_HANDLER]);

        let json = Wryte::new(WryteConfig {
            jsonify: true,
            ..WryteConfig::new("svc")
        });
        assert_eq!(json.list_handlers(), vec![DEFAULT_JSON_HANDLER]);
    }

    #[test]
    fn bare_logger_has_no_handlers() {
        let log = Wryte::bare("svc");
        assert!(log.list_handlers().is_empty());
        assert_eq!(log.threshold(), None);
        assert!(!log.enabled(Severity::Critical));
        log.critical("dropped", &[]);
    }

    #[test]
    fn generated_names_are_unique() {
        let log = Wryte::bare("svc");
        let sink = Arc::new(MemorySink::new());
        let a = log.add_handler(sink.clone(), None, FormatterKind::Json, "info").unwrap();
        let b = log.add_handler(sink, None, FormatterKind::Json, "info").unwrap();
        assert_ne!(a, b);
        assert_eq!(log.list_handlers(), vec![a, b]);
    }

    #[test]
    fn threshold_is_lowest_handler_level() {
        let log = Wryte::bare("svc");
        log.add_handler(Arc::new(MemorySink::new()), None, FormatterKind::Json, "error").unwrap();
        log.add_handler(Arc::new(MemorySink::new()), None, FormatterKind::Json, "warn").unwrap();
        assert_eq!(log.threshold(), Some(Severity::Warning));
        assert!(log.enabled(Severity::Warning));
        assert!(!log.enabled(Severity::Info));
    }
}
