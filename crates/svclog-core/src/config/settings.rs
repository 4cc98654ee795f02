//! Resolved logger settings

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::file::{ConfigFile, ConfigLevel};
use crate::error::LoggerResult;
use crate::format::{Format, Formatter, Metadata};
use crate::level::Level;
use crate::sink::{ConsoleSink, FileSink, NoOpSink, SharedSink};

/// Where records go
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    /// stdout for INFO, stderr for WARN/ERROR
    #[default]
    Console,
    /// Append to a file
    File { path: PathBuf },
    /// Discard everything
    Null,
}

/// Fully resolved configuration for a [`LoggerRegistry`](crate::LoggerRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Records below this level are dropped
    pub level: Level,
    pub format: Format,
    pub sink: SinkConfig,
    /// Service name attached to JSON lines
    pub service: String,
    /// Deployment environment attached to JSON lines
    pub env: String,
    /// Extra static fields attached to JSON lines
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: Format::Text,
            sink: SinkConfig::Console,
            service: "unknown".to_string(),
            env: "dev".to_string(),
            metadata: BTreeMap::new(),
        }
    }
}

impl LoggerConfig {
    /// Defaults, then the user-level file if present, then the process environment
    pub fn load() -> LoggerResult<Self> {
        Self::load_with(Self::default())
    }

    /// Like [`LoggerConfig::load`], starting from `base` instead of the defaults
    pub fn load_with(base: LoggerConfig) -> LoggerResult<Self> {
        Self::load_layers(
            base,
            &ConfigLevel::User.default_path(),
            None,
            |key| std::env::var(key).ok(),
        )
    }

    /// Like [`LoggerConfig::load`], with the workspace file layered over the user file
    pub fn load_for_workspace(workspace_root: impl AsRef<Path>) -> LoggerResult<Self> {
        let workspace = ConfigLevel::workspace_path(workspace_root);
        Self::load_layers(
            Self::default(),
            &ConfigLevel::User.default_path(),
            Some(workspace.as_path()),
            |key| std::env::var(key).ok(),
        )
    }

    /// `base`, then the user file, then the workspace file, then `lookup`
    ///
    /// Missing files are skipped.
    pub fn load_layers<F>(
        base: LoggerConfig,
        user: &Path,
        workspace: Option<&Path>,
        lookup: F,
    ) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = base;
        config.merge(&ConfigFile::load(user)?);
        if let Some(workspace) = workspace {
            config.merge(&ConfigFile::load(workspace)?);
        }
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Defaults overlaid with a single YAML file; a missing file yields the defaults
    pub fn from_file(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let mut config = Self::default();
        config.merge(&ConfigFile::load(path.as_ref())?);
        Ok(config)
    }

    /// Overlay the values a config file sets
    pub fn merge(&mut self, file: &ConfigFile) {
        if let Some(level) = file.level {
            self.level = level;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(sink) = &file.sink {
            self.sink = sink.clone();
        }
        if let Some(service) = &file.service {
            self.service = service.clone();
        }
        if let Some(env) = &file.env {
            self.env = env.clone();
        }
        self.metadata
            .extend(file.metadata.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Overlay environment variables read through `lookup`
    ///
    /// Empty values are ignored. `ENV` wins over `NODE_ENV`.
    pub fn apply_env<F>(&mut self, lookup: F) -> LoggerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(level) = get("LOG_LEVEL") {
            self.level = level.parse()?;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(path) = get("LOG_FILE") {
            self.sink = SinkConfig::File { path: PathBuf::from(path) };
        }
        if let Some(service) = get("SERVICE_NAME") {
            self.service = service;
        }
        if let Some(env) = get("ENV").or_else(|| get("NODE_ENV")) {
            self.env = env;
        }
        Ok(())
    }

    /// Formatter carrying this config's format and metadata
    pub fn formatter(&self) -> Formatter {
        let metadata = Metadata {
            service: Some(self.service.clone()),
            env: Some(self.env.clone()),
            extra: self.metadata.clone(),
        };
        Formatter::new(self.format).with_metadata(metadata)
    }

    /// Open the configured sink
    pub fn build_sink(&self) -> LoggerResult<SharedSink> {
        let sink: SharedSink = match &self.sink {
            SinkConfig::Console => Arc::new(ConsoleSink::with_formatter(self.formatter())),
            SinkConfig::File { path } => Arc::new(FileSink::with_formatter(path, self.formatter())?),
            SinkConfig::Null => Arc::new(NoOpSink::new()),
        };
        Ok(sink)
    }
}
