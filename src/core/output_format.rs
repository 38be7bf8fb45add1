//! Output format configuration for log entries
//!
//! - Text: `"<timestamp> - <level> - <message>"` (default)
//! - Json: one JSON object per line

use super::log_entry::LogEntry;
use super::log_level::LevelAlignment;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `2025-01-08 10:30:45 -  INFO - Tagging release`
    #[default]
    Text,

    /// Example: `{"timestamp":"2025-01-08 10:30:45","level":"INFO","message":"Tagging release"}`
    Json,
}

/// Formatting options shared by the appenders of one logger
///
/// # Examples
///
/// ```
/// use release_log::core::{FormatterConfig, LevelAlignment, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::Rfc3339)
///     .with_level_alignment(LevelAlignment::Left);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub timestamp_format: TimestampFormat,
    pub level_alignment: LevelAlignment,
    pub output_format: OutputFormat,
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_level_alignment(mut self, alignment: LevelAlignment) -> Self {
        self.level_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Render an entry as a single line, without the trailing newline
    pub fn render(&self, entry: &LogEntry) -> String {
        match self.output_format {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json => self.format_json(entry),
        }
    }

    fn format_text(&self, entry: &LogEntry) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp_format.format(entry.timestamp()),
            entry.level().padded(self.level_alignment),
            entry.message()
        )
    }

    fn format_json(&self, entry: &LogEntry) -> String {
        let timestamp = if self.timestamp_format.is_numeric() {
            serde_json::Value::Number(entry.timestamp().timestamp().into())
        } else {
            serde_json::Value::String(self.timestamp_format.format(entry.timestamp()))
        };

        let mut json_obj = serde_json::Map::new();
        json_obj.insert("timestamp".to_string(), timestamp);
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level().to_str().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message().to_string()),
        );

        serde_json::Value::Object(json_obj).to_string()
    }
}
