//! Logger facade: the caller-facing `{info, warn, error}` surface

mod traits;
mod noop;
mod handle;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use handle::LoggerHandle;

pub(crate) use handle::Shared;
