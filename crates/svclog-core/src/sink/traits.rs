//! Sink trait definition

use std::sync::Arc;

use crate::error::SinkResult;
use crate::record::LogRecord;

/// Destination for log records
///
/// Implementations serialize concurrent writers themselves: each call to
/// [`Sink::write`] delivers one whole record or nothing, never a partial line
/// interleaved with another writer's output.
pub trait Sink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Deliver one record
    fn write(&self, record: &LogRecord) -> SinkResult<()>;

    /// Flush buffered output, if any
    fn flush(&self) -> SinkResult<()> {
        Ok(())
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
