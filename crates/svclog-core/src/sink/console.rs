//! Console sink implementation

use std::io::{self, Write};

use super::traits::Sink;
use crate::error::SinkResult;
use crate::format::{Format, Formatter};
use crate::level::Level;
use crate::record::LogRecord;

/// Process stream a record is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// A sink that writes to the console (stdout/stderr)
///
/// INFO goes to stdout; WARN and ERROR go to stderr. Each record is written
/// with a single `write_all` while holding the stream lock, so concurrent
/// writers never interleave within a line.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    formatter: Formatter,
}

impl ConsoleSink {
    /// Create a console sink with plain text output
    pub fn new() -> Self {
        Self::with_formatter(Formatter::new(Format::Text))
    }

    pub fn with_formatter(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Stream used for records at `level`
    pub fn stream_for(level: Level) -> ConsoleStream {
        match level {
            Level::Info => ConsoleStream::Stdout,
            Level::Warn | Level::Error => ConsoleStream::Stderr,
        }
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn write(&self, record: &LogRecord) -> SinkResult<()> {
        let mut line = self.formatter.render(record)?;
        line.push('\n');

        match Self::stream_for(record.level()) {
            ConsoleStream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            ConsoleStream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> SinkResult<()> {
        io::stdout().lock().flush()?;
        io::stderr().lock().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_routing() {
        assert_eq!(ConsoleSink::stream_for(Level::Info), ConsoleStream::Stdout);
        assert_eq!(ConsoleSink::stream_for(Level::Warn), ConsoleStream::Stderr);
        assert_eq!(ConsoleSink::stream_for(Level::Error), ConsoleStream::Stderr);
    }

    #[test]
    fn test_console_sink_writes() {
        // Only checks that writing to the real console succeeds
        let sink = ConsoleSink::with_formatter(Formatter::new(Format::Json));
        assert_eq!(sink.name(), "console");
        for level in Level::ALL {
            sink.write(&LogRecord::new(level, "test", "console sink message")).unwrap();
        }
        sink.flush().unwrap();
    }
}
