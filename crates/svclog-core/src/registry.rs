//! Logger registry: resolves names to handles
//!
//! There is no global registry. Build one at startup and pass it (or the
//! handles it returns) to the components that need logging.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::diagnostics::DeliveryDiagnostics;
use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::logging::{LoggerHandle, Shared};
use crate::sink::{ConsoleSink, SharedSink};

/// Owns the sink and hands out named [`LoggerHandle`]s
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use svclog_core::{Level, Logger, LoggerRegistry, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let registry = LoggerRegistry::new(sink.clone());
///
/// let logger = registry.get_logger("test").unwrap();
/// logger.info("Logger test (info)");
/// logger.warn("Logger test (warn)");
/// logger.error("Logger test (error)");
///
/// assert_eq!(sink.levels(), vec![Level::Info, Level::Warn, Level::Error]);
/// assert!(registry.get_logger("").is_err());
/// ```
pub struct LoggerRegistry {
    shared: Arc<Shared>,
    loggers: RwLock<HashMap<String, LoggerHandle>>,
}

impl LoggerRegistry {
    /// Create a registry forwarding every level to `sink`
    pub fn new(sink: SharedSink) -> Self {
        Self::build(sink, Level::Info, Arc::new(DeliveryDiagnostics::new()))
    }

    /// Create a registry from configuration, opening the configured sink
    pub fn from_config(config: &LoggerConfig) -> LoggerResult<Self> {
        let sink = config.build_sink()?;
        Ok(Self::new(sink).with_min_level(config.level))
    }

    /// Build from `config`, falling back to `fallback`, then to the console
    ///
    /// For callers with no way to report a startup error. Every error on the
    /// way is recorded in `diagnostics`, which the returned registry keeps.
    pub fn from_config_or(
        config: LoggerResult<LoggerConfig>,
        fallback: &LoggerConfig,
        diagnostics: Arc<DeliveryDiagnostics>,
    ) -> Self {
        let registry = config
            .and_then(|config| Self::from_config(&config))
            .or_else(|e| {
                diagnostics.record_failure("config", &e);
                Self::from_config(fallback)
            })
            .unwrap_or_else(|e| {
                diagnostics.record_failure("config", &e);
                Self::new(Arc::new(ConsoleSink::new()))
            });
        registry.with_diagnostics(diagnostics)
    }

    /// Drop records below `level`
    pub fn with_min_level(self, level: Level) -> Self {
        Self::build(Arc::clone(&self.shared.sink), level, Arc::clone(&self.shared.diagnostics))
    }

    /// Report delivery failures into `diagnostics`
    pub fn with_diagnostics(self, diagnostics: Arc<DeliveryDiagnostics>) -> Self {
        Self::build(Arc::clone(&self.shared.sink), self.shared.min_level, diagnostics)
    }

    fn build(sink: SharedSink, min_level: Level, diagnostics: Arc<DeliveryDiagnostics>) -> Self {
        Self {
            shared: Arc::new(Shared {
                sink,
                min_level,
                diagnostics,
            }),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a logger by name
    ///
    /// Repeated calls with the same name return the same handle. Fails with
    /// `InvalidArgument` when `name` is empty.
    pub fn get_logger(&self, name: &str) -> LoggerResult<LoggerHandle> {
        if name.is_empty() {
            return Err(LoggerError::invalid_argument("logger name must not be empty"));
        }

        if let Some(handle) = self.loggers.read().get(name) {
            return Ok(handle.clone());
        }

        let mut loggers = self.loggers.write();
        let handle = loggers
            .entry(name.to_string())
            .or_insert_with(|| LoggerHandle::new(Arc::from(name), Arc::clone(&self.shared)));
        Ok(handle.clone())
    }

    /// Names of all loggers resolved so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn min_level(&self) -> Level {
        self.shared.min_level
    }

    pub fn sink(&self) -> &SharedSink {
        &self.shared.sink
    }

    pub fn diagnostics(&self) -> &DeliveryDiagnostics {
        &self.shared.diagnostics
    }

    /// Flush the sink; a failure is recorded in diagnostics, not returned
    pub fn flush(&self) {
        if let Err(e) = self.shared.sink.flush() {
            self.shared.diagnostics.record_failure(self.shared.sink.name(), e);
        }
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("sink", &self.shared.sink.name())
            .field("min_level", &self.shared.min_level)
            .field("loggers", &self.logger_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Logger;
    use crate::config::SinkConfig;
    use crate::sink::MemorySink;
    use tempfile::tempdir;

    fn registry() -> (LoggerRegistry, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (LoggerRegistry::new(sink.clone()), sink)
    }

    #[test]
    fn test_empty_name_rejected() {
        let (registry, _) = registry();
        let err = registry.get_logger("").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidArgument(_)));
        assert!(registry.logger_names().is_empty());
    }

    #[test]
    fn test_same_name_same_handle() {
        let (registry, _) = registry();
        let a = registry.get_logger("payments").unwrap();
        let b = registry.get_logger("payments").unwrap();
        let c = registry.get_logger("shipping").unwrap();

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(registry.logger_names(), vec!["payments", "shipping"]);
    }

    #[test]
    fn test_handles_share_sink() {
        let (registry, sink) = registry();
        registry.get_logger("a").unwrap().info("from a");
        registry.get_logger("b").unwrap().error("from b");

        let loggers: Vec<_> = sink.records().iter().map(|r| r.logger().to_string()).collect();
        assert_eq!(loggers, vec!["a", "b"]);
    }

    #[test]
    fn test_with_min_level() {
        let sink = Arc::new(MemorySink::new());
        let registry = LoggerRegistry::new(sink.clone()).with_min_level(Level::Error);
        assert_eq!(registry.min_level(), Level::Error);

        let logger = registry.get_logger("test").unwrap();
        logger.info("no");
        logger.warn("no");
        logger.error("yes");

        assert_eq!(sink.messages(), vec!["yes"]);
    }

    #[test]
    fn test_with_diagnostics() {
        let diagnostics = Arc::new(DeliveryDiagnostics::quiet());
        let (registry, _) = registry();
        let registry = registry.with_diagnostics(Arc::clone(&diagnostics));

        registry.flush();
        assert_eq!(registry.diagnostics().failure_count(), 0);
        assert_eq!(registry.sink().name(), "memory");
    }

    #[test]
    fn test_from_config_or_records_config_error() {
        let diagnostics = Arc::new(DeliveryDiagnostics::quiet());
        let fallback = LoggerConfig {
            sink: SinkConfig::Null,
            level: Level::Warn,
            ..LoggerConfig::default()
        };

        let registry = LoggerRegistry::from_config_or(
            Err(LoggerError::InvalidLevel("verbose".to_string())),
            &fallback,
            Arc::clone(&diagnostics),
        );

        assert_eq!(registry.sink().name(), "null");
        assert_eq!(registry.min_level(), Level::Warn);
        assert_eq!(diagnostics.failure_count(), 1);
        assert_eq!(
            diagnostics.last_error().as_deref(),
            Some("config: Unknown log level: verbose")
        );
        assert_eq!(registry.diagnostics().failure_count(), 1);
    }

    #[test]
    fn test_from_config_or_falls_back_when_sink_fails() {
        let dir = tempdir().unwrap();
        let diagnostics = Arc::new(DeliveryDiagnostics::quiet());
        let config = LoggerConfig {
            sink: SinkConfig::File { path: dir.path().to_path_buf() },
            ..LoggerConfig::default()
        };
        let fallback = LoggerConfig {
            sink: SinkConfig::Null,
            ..LoggerConfig::default()
        };

        let registry = LoggerRegistry::from_config_or(Ok(config), &fallback, Arc::clone(&diagnostics));

        assert_eq!(registry.sink().name(), "null");
        assert_eq!(diagnostics.failure_count(), 1);
        assert!(diagnostics.last_error().unwrap().starts_with("config: IO error"));
    }

    #[test]
    fn test_from_config_or_clean_config() {
        let diagnostics = Arc::new(DeliveryDiagnostics::quiet());
        let config = LoggerConfig {
            sink: SinkConfig::Null,
            ..LoggerConfig::default()
        };

        let registry =
            LoggerRegistry::from_config_or(Ok(config), &LoggerConfig::default(), Arc::clone(&diagnostics));

        assert_eq!(registry.sink().name(), "null");
        assert_eq!(diagnostics.failure_count(), 0);
    }
}
