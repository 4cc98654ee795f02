//! YAML configuration files
//!
//! Supports user-level (~/.config/svclog/config.yaml) and workspace-level
//! (.config/svclog/config.yaml) files. Every key is optional; unset keys fall
//! through to the next source.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::settings::SinkConfig;
use crate::error::{LoggerError, LoggerResult};
use crate::format::Format;
use crate::level::Level;

/// Contents of one configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<SinkConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ConfigFile {
    /// Read a config file; a missing file is an empty config
    pub fn load(path: &Path) -> LoggerResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write this config as YAML, creating parent directories
    pub fn save(&self, path: &Path) -> LoggerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| LoggerError::Config(format!("Failed to serialize YAML: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/svclog/config.yaml)
    User,
    /// Workspace-level config (.config/svclog/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }

    /// Default path of the user-level file; the workspace file is relative to
    /// the current directory
    pub fn default_path(&self) -> PathBuf {
        match self {
            ConfigLevel::User => {
                // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
                let config_dir = dirs::config_dir().unwrap_or_else(|| {
                    dirs::home_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join(".config")
                });
                config_dir.join("svclog").join("config.yaml")
            }
            ConfigLevel::Workspace => Self::workspace_path("."),
        }
    }

    /// Workspace-level file under `workspace_root`
    pub fn workspace_path(workspace_root: impl AsRef<Path>) -> PathBuf {
        workspace_root
            .as_ref()
            .join(".config")
            .join("svclog")
            .join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let config = ConfigFile::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = ConfigLevel::workspace_path(dir.path());

        let config = ConfigFile {
            level: Some(Level::Warn),
            format: Some(Format::Json),
            sink: Some(SinkConfig::File { path: PathBuf::from("/var/log/svc.log") }),
            service: Some("orders".to_string()),
            ..ConfigFile::default()
        };
        config.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("level: warn"));
        assert!(content.contains("type: file"));

        assert_eq!(ConfigFile::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "level: [not, a, level]").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));
    }

    #[test]
    fn test_load_accepts_env_style_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "level: WARNING\nformat: plain\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.level, Some(Level::Warn));
        assert_eq!(config.format, Some(Format::Text));

        fs::write(&path, "level: verbose\n").unwrap();
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, LoggerError::Config(_)));
    }

    #[test]
    fn test_paths() {
        assert!(ConfigLevel::User.default_path().ends_with("svclog/config.yaml"));
        assert_eq!(
            ConfigLevel::workspace_path("/srv/app"),
            PathBuf::from("/srv/app/.config/svclog/config.yaml")
        );
        assert_eq!(ConfigLevel::Workspace.as_str(), "workspace");
    }
}
