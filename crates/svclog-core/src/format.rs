//! Line formatting for text and JSON output

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, SinkResult};
use crate::record::LogRecord;

/// Keys owned by the record itself; metadata cannot override them
const RESERVED_KEYS: [&str; 6] = ["timestamp", "level", "message", "logger", "service", "env"];

/// Output layout of a formatted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Format {
    /// `2024-05-01T12:00:00.000Z [WARN ] [test] message`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Static fields attached to every JSON line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    /// Additional key/value pairs, e.g. `version`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    level: &'static str,
    message: &'a str,
    logger: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<&'a str>,
    #[serde(flatten)]
    extra: BTreeMap<&'a str, &'a str>,
}

/// Renders records into single lines (no trailing newline)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    format: Format,
    metadata: Metadata,
}

impl Formatter {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            metadata: Metadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Render a record as one line
    pub fn render(&self, record: &LogRecord) -> SinkResult<String> {
        match self.format {
            Format::Text => Ok(self.render_text(record)),
            Format::Json => self.render_json(record),
        }
    }

    fn render_text(&self, record: &LogRecord) -> String {
        let message = record
            .message()
            .replace('\\', "\\\\")
            .replace('\r', "\\r")
            .replace('\n', "\\n");
        format!(
            "{} [{}] [{}] {}",
            record.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
            record.level(),
            record.logger(),
            message
        )
    }

    fn render_json(&self, record: &LogRecord) -> SinkResult<String> {
        let extra = self
            .metadata
            .extra
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        let line = JsonLine {
            timestamp: record.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
            level: record.level().as_lower_str(),
            message: record.message(),
            logger: record.logger(),
            service: self.metadata.service.as_deref(),
            env: self.metadata.env.as_deref(),
            extra,
        };

        Ok(serde_json::to_string(&line)?)
    }
}
