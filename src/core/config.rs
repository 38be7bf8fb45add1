//! Logger configuration

use super::error::Result;
use super::log_level::{LevelAlignment, LogLevel};
use super::output_format::{FormatterConfig, OutputFormat};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable [`LoggerConfig::from_env`] reads the log target from
pub const LOG_TARGET_ENV: &str = "RELEASE_LOG_FILE";

/// Configuration held by a [`Logger`](super::Logger) for its whole lifetime
///
/// # Examples
///
/// ```
/// use release_log::core::{LoggerConfig, LevelAlignment, LogLevel};
///
/// let config = LoggerConfig::new()
///     .with_log_target("/var/log/release.log")
///     .with_min_level(LogLevel::Debug)
///     .with_level_alignment(LevelAlignment::Left);
/// assert!(config.log_target().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// File every log line is appended to
    pub log_target: Option<PathBuf>,
    pub min_level: LogLevel,
    #[serde(flatten)]
    pub formatter: FormatterConfig,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the log target from [`LOG_TARGET_ENV`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_var(LOG_TARGET_ENV)
    }

    /// Read the log target from the named environment variable
    ///
    /// An unset or empty variable leaves the target unconfigured.
    #[must_use]
    pub fn from_env_var(name: &str) -> Self {
        let log_target = std::env::var_os(name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            log_target,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_log_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_target = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_level_alignment(mut self, alignment: LevelAlignment) -> Self {
        self.formatter.level_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.formatter.output_format = format;
        self
    }

    /// The configured target; an empty path counts as unset
    pub fn log_target(&self) -> Option<&Path> {
        self.log_target
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Check settings that would otherwise degrade silently at log time
    pub fn validate(&self) -> Result<()> {
        self.formatter.timestamp_format.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let config = LoggerConfig::default();
        assert!(config.log_target().is_none());
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.formatter.level_alignment, LevelAlignment::Right);
    }

    #[test]
    fn test_empty_target_counts_as_unset() {
        let config = LoggerConfig::new().with_log_target("");
        assert!(config.log_target.is_some());
        assert!(config.log_target().is_none());
    }

    #[test]
    fn test_from_env_var() {
        let var = "RELEASE_LOG_TEST_TARGET_FROM_ENV";
        std::env::set_var(var, "/tmp/release-from-env.log");
        let config = LoggerConfig::from_env_var(var);
        assert_eq!(
            config.log_target(),
            Some(Path::new("/tmp/release-from-env.log"))
        );

        std::env::set_var(var, "");
        assert!(LoggerConfig::from_env_var(var).log_target().is_none());

        std::env::remove_var(var);
        assert!(LoggerConfig::from_env_var(var).log_target().is_none());
    }

    #[test]
    fn test_deserialize() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{"log_target":"/var/log/release.log","min_level":"Debug","level_alignment":"left"}"#,
        )
        .expect("deserialize");
        assert_eq!(config.log_target(), Some(Path::new("/var/log/release.log")));
        assert_eq!(config.min_level, LogLevel::Debug);
        assert_eq!(config.formatter.level_alignment, LevelAlignment::Left);
        assert_eq!(config.formatter.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_deserialized_bad_pattern_fails_validation() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"timestamp_format":{"Custom":"%Q"}}"#).expect("deserialize");
        assert!(config.validate().is_err());
        assert!(LoggerConfig::default().validate().is_ok());
    }
}
