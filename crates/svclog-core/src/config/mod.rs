//! Logger configuration
//!
//! Sources, lowest precedence first:
//! - Built-in defaults (`LoggerConfig::default()`)
//! - User-level YAML (`<config_dir>/svclog/config.yaml`)
//! - Workspace-level YAML (`.config/svclog/config.yaml` under a workspace root)
//! - Environment variables (`LOG_LEVEL`, `LOG_FORMAT`, `LOG_FILE`, `SERVICE_NAME`, `ENV`/`NODE_ENV`)

mod settings;
mod file;

pub use settings::{LoggerConfig, SinkConfig};
pub use file::{ConfigFile, ConfigLevel};
