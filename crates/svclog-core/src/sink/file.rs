//! Append-only file sink
//!
//! Useful when stdout/stderr isn't visible (daemons, editor extension hosts).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Sink;
use crate::error::{LoggerResult, SinkResult};
use crate::format::{Format, Formatter};
use crate::record::LogRecord;

/// A sink that appends one line per record to a file
pub struct FileSink {
    path: PathBuf,
    formatter: Formatter,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) `path` for appending, with plain text output
    pub fn open(path: impl Into<PathBuf>) -> LoggerResult<Self> {
        Self::with_formatter(path, Formatter::new(Format::Text))
    }

    /// Open (or create) `path` for appending
    pub fn with_formatter(path: impl Into<PathBuf>, formatter: Formatter) -> LoggerResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            formatter,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write(&self, record: &LogRecord) -> SinkResult<()> {
        let mut line = self.formatter.render(record)?;
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> SinkResult<()> {
        self.file.lock().flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .field("format", &self.formatter.format())
            .finish()
    }
}
