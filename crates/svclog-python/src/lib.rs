//! Python bindings for svclog via PyO3
//!
//! ```python
//! import svclog
//!
//! logger = svclog.get_logger("test")
//! logger.info("Logger test (info)")
//! logger.warn("Logger test (warn)")
//! logger.error("Logger test (error)")
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use svclog_core::{
    DeliveryDiagnostics, Format, Level, Logger as CoreLogger, LoggerConfig, LoggerError, LoggerHandle, LoggerRegistry,
    SinkConfig,
};

// ============================================================================
// Module registry
// ============================================================================

/// Registry shared by every `get_logger` call from Python
///
/// Python has no startup hook to pass a registry around, so the module owns
/// one. `configure` replaces it; handles obtained earlier keep the old sink.
///
/// A broken config at import time falls back to the defaults; the error is
/// counted in `delivery_failures()` and noted once on stderr.
static REGISTRY: Lazy<RwLock<Arc<LoggerRegistry>>> = Lazy::new(|| {
    let registry = LoggerRegistry::from_config_or(
        python_config(),
        &python_defaults(),
        Arc::new(DeliveryDiagnostics::new()),
    );
    RwLock::new(Arc::new(registry))
});

/// JSON lines on the console, as Python services expect
fn python_defaults() -> LoggerConfig {
    LoggerConfig {
        format: Format::Json,
        ..LoggerConfig::default()
    }
}

fn python_config() -> Result<LoggerConfig, LoggerError> {
    LoggerConfig::load_with(python_defaults())
}

fn to_py_err(e: LoggerError) -> PyErr {
    match e {
        LoggerError::InvalidArgument(_) | LoggerError::InvalidLevel(_) | LoggerError::InvalidFormat(_) => {
            PyValueError::new_err(e.to_string())
        }
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

// ============================================================================
// Logger
// ============================================================================

#[pyclass(name = "Logger", frozen)]
pub struct PyLogger {
    inner: LoggerHandle,
}

#[pymethods]
impl PyLogger {
    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    fn info(&self, py: Python<'_>, message: &str) {
        py.allow_threads(|| self.inner.info(message));
    }

    fn warn(&self, py: Python<'_>, message: &str) {
        py.allow_threads(|| self.inner.warn(message));
    }

    /// Alias for `warn`, matching the standard `logging` module
    fn warning(&self, py: Python<'_>, message: &str) {
        self.warn(py, message);
    }

    fn error(&self, py: Python<'_>, message: &str) {
        py.allow_threads(|| self.inner.error(message));
    }

    fn log(&self, py: Python<'_>, level: &str, message: &str) -> PyResult<()> {
        let level: Level = level.parse().map_err(to_py_err)?;
        py.allow_threads(|| self.inner.log(level, message));
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!("Logger(name='{}')", self.inner.name())
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Get a logger by name; raises ValueError for an empty name
#[pyfunction]
fn get_logger(name: &str) -> PyResult<PyLogger> {
    let registry = Arc::clone(&REGISTRY.read());
    let inner = registry.get_logger(name).map_err(to_py_err)?;
    Ok(PyLogger { inner })
}

/// Rebuild the module registry
///
/// Unset arguments keep their configured value (user config file, then
/// `LOG_LEVEL`, `LOG_FORMAT`, `LOG_FILE`, `SERVICE_NAME`, `ENV`).
#[pyfunction]
#[pyo3(signature = (level=None, format=None, service=None, env=None, path=None))]
fn configure(
    level: Option<&str>,
    format: Option<&str>,
    service: Option<String>,
    env: Option<String>,
    path: Option<PathBuf>,
) -> PyResult<()> {
    let mut config = python_config().map_err(to_py_err)?;

    if let Some(level) = level {
        config.level = level.parse().map_err(to_py_err)?;
    }
    if let Some(format) = format {
        config.format = format.parse().map_err(to_py_err)?;
    }
    if let Some(service) = service {
        config.service = service;
    }
    if let Some(env) = env {
        config.env = env;
    }
    if let Some(path) = path {
        config.sink = SinkConfig::File { path };
    }

    let registry = LoggerRegistry::from_config(&config).map_err(to_py_err)?;
    *REGISTRY.write() = Arc::new(registry);
    Ok(())
}

/// Number of records the current registry failed to deliver
#[pyfunction]
fn delivery_failures() -> u64 {
    REGISTRY.read().diagnostics().failure_count()
}

#[pymodule]
fn svclog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLogger>()?;

    m.add_function(wrap_pyfunction!(get_logger, m)?)?;
    m.add_function(wrap_pyfunction!(configure, m)?)?;
    m.add_function(wrap_pyfunction!(delivery_failures, m)?)?;

    Ok(())
}
