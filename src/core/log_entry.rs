//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single record; only built through [`LogEntry::new`], which escapes the
/// message
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Escape line breaks and tabs so one entry always renders as one line
    /// and a message cannot forge extra records in the log file.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: impl AsRef<str>, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message.as_ref()),
            timestamp,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }
}
