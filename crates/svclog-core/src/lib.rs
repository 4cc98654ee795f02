//! svclog Core
//!
//! A small logger facade: resolve a named logger, emit INFO/WARN/ERROR
//! messages, and let a single configured sink decide how they are rendered
//! and where they go.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use svclog_core::{Logger, LoggerConfig, LoggerRegistry};
//!
//! let registry = LoggerRegistry::from_config(&LoggerConfig::load()?)?;
//!
//! let logger = registry.get_logger("test")?;
//! logger.info("Logger test (info)");
//! logger.warn("Logger test (warn)");
//! logger.error("Logger test (error)");
//! # Ok::<(), svclog_core::LoggerError>(())
//! ```
//!
//! Emission never fails: delivery problems are counted by the registry's
//! [`DeliveryDiagnostics`] instead of being returned to the caller.

pub mod error;
pub mod level;
pub mod record;
pub mod format;
pub mod sink;
pub mod diagnostics;
pub mod logging;
pub mod registry;
pub mod config;

// Re-export commonly used types
pub use error::{LoggerError, LoggerResult, SinkError, SinkResult};
pub use level::Level;
pub use record::LogRecord;
pub use format::{Format, Formatter, Metadata};

pub use sink::{
    Sink, SharedSink,
    ConsoleSink, ConsoleStream, FileSink, MemorySink, NoOpSink,
};

pub use diagnostics::DeliveryDiagnostics;

pub use logging::{Logger, LoggerExt, LoggerHandle, NoOpLogger, SharedLogger, BoxedLogger};

pub use registry::LoggerRegistry;

pub use config::{LoggerConfig, SinkConfig, ConfigFile, ConfigLevel};
