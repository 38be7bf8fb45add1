//! Destinations a [`Logger`](super::Logger) writes entries to

use super::{error::Result, log_entry::LogEntry};

/// A log destination
///
/// `append` receives entries already past the level filter, with the message
/// sanitized to a single line.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
