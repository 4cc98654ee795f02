//! In-memory sink

use parking_lot::RwLock;

use super::traits::Sink;
use crate::error::SinkResult;
use crate::format::Formatter;
use crate::level::Level;
use crate::record::LogRecord;

/// In-memory sink for testing and embedding
///
/// Records are kept in arrival order and are lost when the sink is dropped.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use svclog_core::{Logger, LoggerRegistry, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let registry = LoggerRegistry::new(sink.clone());
/// registry.get_logger("test").unwrap().info("hello");
/// assert_eq!(sink.messages(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RwLock<Vec<LogRecord>>,
    formatter: Formatter,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter used by [`MemorySink::lines`]
    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            formatter,
        }
    }

    /// Snapshot of all records received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.records.read().iter().map(|r| r.level()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.read().iter().map(|r| r.message().to_string()).collect()
    }

    /// Records rendered through the sink's formatter
    pub fn lines(&self) -> Vec<String> {
        self.records
            .read()
            .iter()
            .filter_map(|r| self.formatter.render(r).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&self, record: &LogRecord) -> SinkResult<()> {
        self.records.write().push(record.clone());
        Ok(())
    }
}
