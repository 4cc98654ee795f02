//! Logger trait definition

use std::sync::Arc;

use crate::level::Level;

/// Leveled emission, decoupled from how records are rendered or delivered
///
/// Implementations:
/// - `LoggerHandle`: named handle obtained from a `LoggerRegistry`
/// - `NoOpLogger`: silent logger for testing
///
/// None of these methods can fail: delivery problems are the sink's concern
/// and never reach the caller.
pub trait Logger: Send + Sync {
    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log a message at `level`
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Info => self.info(message),
            Level::Warn => self.warn(message),
            Level::Error => self.error(message),
        }
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.info(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.warn(&format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Logger as _;
            $logger.error(&format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(Level, String)>>,
    }

    impl Logger for Recording {
        fn info(&self, message: &str) {
            self.calls.lock().push((Level::Info, message.to_string()));
        }
        fn warn(&self, message: &str) {
            self.calls.lock().push((Level::Warn, message.to_string()));
        }
        fn error(&self, message: &str) {
            self.calls.lock().push((Level::Error, message.to_string()));
        }
    }

    #[test]
    fn test_log_dispatches_by_level() {
        let logger = Recording::default();
        logger.log(Level::Error, "e");
        logger.log(Level::Info, "i");

        let calls = logger.calls.lock();
        assert_eq!(calls[0], (Level::Error, "e".to_string()));
        assert_eq!(calls[1], (Level::Info, "i".to_string()));
    }

    #[test]
    fn test_fmt_helpers_and_macros() {
        let logger = Recording::default();
        logger.warn_fmt(format_args!("{} retries left", 3));
        crate::log_error!(logger, "failed after {}ms", 250);

        let calls = logger.calls.lock();
        assert_eq!(calls[0], (Level::Warn, "3 retries left".to_string()));
        assert_eq!(calls[1], (Level::Error, "failed after 250ms".to_string()));
    }

    #[test]
    fn test_shared_logger_is_object_safe() {
        let logger: SharedLogger = Arc::new(Recording::default());
        logger.info("through a trait object");
        crate::log_info!(logger, "macro through {}", "deref");
    }
}
