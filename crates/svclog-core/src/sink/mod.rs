//! Output sinks
//!
//! A sink is the single destination a registry forwards records to:
//! - `ConsoleSink`: stdout for INFO, stderr for WARN/ERROR
//! - `FileSink`: append-only file
//! - `MemorySink`: keeps records in memory (tests, embedding)
//! - `NoOpSink`: discards everything

mod traits;
mod console;
mod file;
mod memory;
mod noop;

pub use traits::{Sink, SharedSink};
pub use console::{ConsoleSink, ConsoleStream};
pub use file::FileSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;
