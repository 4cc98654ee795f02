//! No-op logger implementation

use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for components that take a `&dyn Logger` in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
