//! Severity levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Severity of a log record, ordered `Info < Warn < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Level; 3] = [Level::Info, Level::Warn, Level::Error];

    /// Upper-case tag, e.g. `"WARN"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Lower-case name used in JSON output and configuration
    pub fn as_lower_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padded so text columns line up.
        match self {
            Level::Info => write!(f, "INFO "),
            Level::Warn => write!(f, "WARN "),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}
