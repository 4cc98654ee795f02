//! Named logger handles

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::traits::Logger;
use crate::diagnostics::DeliveryDiagnostics;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::SharedSink;

/// State shared by every handle of one registry
pub(crate) struct Shared {
    pub(crate) sink: SharedSink,
    pub(crate) min_level: Level,
    pub(crate) diagnostics: Arc<DeliveryDiagnostics>,
}

impl Shared {
    /// Hand a record to the sink; failures and panics end up in diagnostics
    fn deliver(&self, record: &LogRecord) {
        let sink = &self.sink;
        match panic::catch_unwind(AssertUnwindSafe(|| sink.write(record))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => self.diagnostics.record_failure(sink.name(), e),
            Err(_) => self.diagnostics.record_failure(sink.name(), "sink panicked"),
        }
    }
}

/// A named entry point for emitting records
///
/// Obtained from [`LoggerRegistry::get_logger`](crate::LoggerRegistry::get_logger).
/// Cloning is cheap and clones share the same sink. The name is fixed for
/// the handle's lifetime.
#[derive(Clone)]
pub struct LoggerHandle {
    name: Arc<str>,
    shared: Arc<Shared>,
}

impl LoggerHandle {
    pub(crate) fn new(name: Arc<str>, shared: Arc<Shared>) -> Self {
        Self { name, shared }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a record at `level` would reach the sink
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.shared.min_level
    }

    /// Whether two handles share the same underlying instance
    pub fn ptr_eq(&self, other: &LoggerHandle) -> bool {
        Arc::ptr_eq(&self.name, &other.name) && Arc::ptr_eq(&self.shared, &other.shared)
    }

    fn emit(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord::new(level, Arc::clone(&self.name), message);
        self.shared.deliver(&record);
    }
}

impl Logger for LoggerHandle {
    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.name)
            .field("sink", &self.shared.sink.name())
            .field("min_level", &self.shared.min_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SinkError, SinkResult};
    use crate::sink::{MemorySink, Sink};

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn name(&self) -> &str {
            "broken"
        }

        fn write(&self, _record: &LogRecord) -> SinkResult<()> {
            Err(SinkError::Unavailable("stream closed".to_string()))
        }
    }

    struct PanickingSink;

    impl Sink for PanickingSink {
        fn name(&self) -> &str {
            "panicking"
        }

        fn write(&self, _record: &LogRecord) -> SinkResult<()> {
            panic!("sink exploded");
        }
    }

    fn handle(name: &str, sink: SharedSink, min_level: Level) -> (LoggerHandle, Arc<DeliveryDiagnostics>) {
        let diagnostics = Arc::new(DeliveryDiagnostics::quiet());
        let shared = Arc::new(Shared {
            sink,
            min_level,
            diagnostics: Arc::clone(&diagnostics),
        });
        (LoggerHandle::new(Arc::from(name), shared), diagnostics)
    }

    #[test]
    fn test_records_carry_name_and_level() {
        let sink = Arc::new(MemorySink::new());
        let (logger, _) = handle("orders", sink.clone(), Level::Info);

        logger.warn("low stock");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].logger(), "orders");
        assert_eq!(records[0].level(), Level::Warn);
        assert_eq!(records[0].message(), "low stock");
    }

    #[test]
    fn test_min_level_filters() {
        let sink = Arc::new(MemorySink::new());
        let (logger, _) = handle("test", sink.clone(), Level::Warn);

        assert!(!logger.enabled(Level::Info));
        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept too");

        assert_eq!(sink.levels(), vec![Level::Warn, Level::Error]);
    }

    #[test]
    fn test_sink_error_is_swallowed() {
        let (logger, diagnostics) = handle("test", Arc::new(BrokenSink), Level::Info);

        logger.info("a");
        logger.error("b");

        assert_eq!(diagnostics.failure_count(), 2);
        assert_eq!(
            diagnostics.last_error().as_deref(),
            Some("broken: Sink not available: stream closed")
        );
    }

    #[test]
    fn test_sink_panic_is_contained() {
        let (logger, diagnostics) = handle("test", Arc::new(PanickingSink), Level::Info);

        logger.warn("still returns");

        assert_eq!(diagnostics.failure_count(), 1);
        assert_eq!(diagnostics.last_error().as_deref(), Some("panicking: sink panicked"));
    }

    #[test]
    fn test_debug_output() {
        let (logger, _) = handle("test", Arc::new(MemorySink::new()), Level::Info);
        let debug = format!("{:?}", logger);
        assert!(debug.contains("\"test\""));
        assert!(debug.contains("memory"));
    }
}
