//! No-op sink implementation

use super::traits::Sink;
use crate::error::SinkResult;
use crate::record::LogRecord;

/// A sink that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn name(&self) -> &str {
        "null"
    }

    fn write(&self, _record: &LogRecord) -> SinkResult<()> {
        Ok(())
    }
}
