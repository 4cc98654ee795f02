//! Error types for the logger facade and its sinks

use thiserror::Error;

/// Errors visible to callers of the facade
///
/// Emission never returns these. They surface only while building a
/// registry, resolving a logger, or loading configuration.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// A logger was requested with an unusable argument (e.g. an empty name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Unknown log format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

/// Errors raised by a sink while delivering a record
///
/// The facade swallows these and reports them through
/// [`DeliveryDiagnostics`](crate::diagnostics::DeliveryDiagnostics).
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sink not available: {0}")]
    Unavailable(String),

    #[error("Sink error: {0}")]
    Other(String),
}

pub type SinkResult<T> = Result<T, SinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoggerError::invalid_argument("logger name must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: logger name must not be empty");

        let err = SinkError::Unavailable("stdout closed".to_string());
        assert_eq!(err.to_string(), "Sink not available: stdout closed");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SinkError = io.into();
        assert!(matches!(err, SinkError::Io(_)));
    }
}
