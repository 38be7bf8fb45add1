//! Console appender implementation
//!
//! Mirrors log lines to the terminal: `ERROR` to stderr, everything else to
//! stdout.

use crate::core::{Appender, FormatterConfig, LogEntry, LogLevel, OutputFormat, Result};
#[cfg(feature = "console")]
use colored::Colorize;

pub struct ConsoleAppender {
    use_colors: bool,
    formatter: FormatterConfig,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            formatter: FormatterConfig::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            formatter: FormatterConfig::default(),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// Format an entry, colouring the level slot when enabled
    fn format_line(&self, entry: &LogEntry) -> String {
        if !self.use_colors || self.formatter.output_format == OutputFormat::Json {
            return self.formatter.render(entry);
        }

        format!(
            "{} - {} - {}",
            self.formatter.timestamp_format.format(entry.timestamp()),
            self.colored_level(entry.level()),
            entry.message()
        )
    }

    #[cfg(feature = "console")]
    fn colored_level(&self, level: LogLevel) -> String {
        level
            .padded(self.formatter.level_alignment)
            .color(level.color_code())
            .to_string()
    }

    #[cfg(not(feature = "console"))]
    fn colored_level(&self, level: LogLevel) -> String {
        level.padded(self.formatter.level_alignment)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_line(entry);

        match entry.level() {
            LogLevel::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("unambiguous local time");
        LogEntry::new(level, message, at)
    }

    #[test]
    fn test_plain_line_matches_file_format() {
        let appender = ConsoleAppender::with_colors(false);
        assert_eq!(
            appender.format_line(&entry(LogLevel::Warn, "retrying")),
            "2025-01-08 10:30:45 -  WARN - retrying"
        );
    }

    #[test]
    fn test_json_ignores_colors() {
        let appender = ConsoleAppender::with_colors(true)
            .with_formatter(FormatterConfig::new().with_output_format(OutputFormat::Json));
        let line = appender.format_line(&entry(LogLevel::Error, "boom"));
        assert!(line.starts_with('{'));
        assert!(line.contains("\"level\":\"ERROR\""));
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::with_colors(false);
        appender.append(&entry(LogLevel::Info, "console test")).unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "console");
    }
}
