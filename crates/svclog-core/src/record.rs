//! Log records

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::level::Level;

/// An immutable record produced by one emission call
///
/// Fields are fixed at construction; sinks only ever see `&LogRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    level: Level,
    logger: Arc<str>,
    message: String,
}

impl LogRecord {
    /// Create a record stamped with the current time
    pub fn new(level: Level, logger: impl Into<Arc<str>>, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, logger, message)
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Utc>,
        level: Level,
        logger: impl Into<Arc<str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            logger: logger.into(),
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Name of the logger that emitted this record
    pub fn logger(&self) -> &str {
        &self.logger
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = LogRecord::at(ts, Level::Warn, "test", "disk almost full");

        assert_eq!(record.timestamp(), ts);
        assert_eq!(record.level(), Level::Warn);
        assert_eq!(record.logger(), "test");
        assert_eq!(record.message(), "disk almost full");
    }

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let record = LogRecord::new(Level::Info, "test", "hello");
        assert!(record.timestamp() >= before);
        assert!(record.timestamp() <= Utc::now());
    }
}
