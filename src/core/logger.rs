//! Main logger implementation

use super::{
    appender::Appender,
    clock::{Clock, SystemClock},
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::{LevelAlignment, LogLevel},
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    timestamp::TimestampFormat,
};
use crate::appenders::FileAppender;
use parking_lot::{Mutex, RwLock};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Sink for operator-visible diagnostics, stderr unless replaced
pub type ErrorStream = Box<dyn Write + Send>;

/// Appends timestamped, level-tagged lines to the configured log target
///
/// # Example
///
/// ```no_run
/// use release_log::prelude::*;
///
/// let logger = Logger::new(LoggerConfig::new().with_log_target("/var/log/release.log"));
/// logger.log_info("tagging release")?;
/// logger.log_error("push to mirror failed");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    target: Option<Mutex<FileAppender>>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    error_stream: Mutex<ErrorStream>,
    clock: Arc<dyn Clock>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger writing diagnostics to stderr and reading the system clock
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::from_parts(
            config,
            Box::new(std::io::stderr()),
            Arc::new(SystemClock),
            false,
        )
    }

    fn from_parts(
        config: LoggerConfig,
        error_stream: ErrorStream,
        clock: Arc<dyn Clock>,
        lock_file: bool,
    ) -> Self {
        let target = config.log_target().map(|path| {
            let appender = FileAppender::new(path).with_formatter(config.formatter.clone());
            #[cfg(feature = "file")]
            let appender = appender.with_file_lock(lock_file);
            #[cfg(not(feature = "file"))]
            let _ = lock_file;
            Mutex::new(appender)
        });

        Self {
            config,
            target,
            appenders: RwLock::new(Vec::new()),
            error_stream: Mutex::new(error_stream),
            clock,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Whether a non-empty log target is configured
    pub fn is_configured(&self) -> bool {
        self.target.is_some()
    }

    /// Extra destination receiving every entry written to the log target
    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.config.min_level = level;
    }

    /// Current time from this logger's clock in its timestamp format
    pub fn current_timestamp(&self) -> String {
        self.config
            .formatter
            .timestamp_format
            .format(&self.clock.now())
    }

    /// Append one line to the log target
    ///
    /// Fails with [`LoggerError::LogTargetNotConfigured`] when no target is
    /// set, after writing `ERROR - log target not configured` to the error
    /// stream, whatever the level. Entries below the minimum level are
    /// skipped once a target is known to exist.
    pub fn log_message(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        let Some(target) = self.target.as_ref() else {
            self.metrics.record_unconfigured();
            self.write_diagnostic(&format!("ERROR - {}", LoggerError::LogTargetNotConfigured));
            return Err(LoggerError::LogTargetNotConfigured);
        };

        if level < self.config.min_level {
            return Ok(());
        }

        let entry = LogEntry::new(level, message, self.clock.now());

        let result = target.lock().append(&entry);
        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_failed();
        }

        self.dispatch(&entry);
        result
    }

    #[inline]
    pub fn log_debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_message(LogLevel::Debug, message)
    }

    #[inline]
    pub fn log_info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_message(LogLevel::Info, message)
    }

    #[inline]
    pub fn log_warn(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_message(LogLevel::Warn, message)
    }

    /// Echo `ERROR - <message>` to the error stream, then try to log it
    ///
    /// The echo always happens. A failure to write the log target is not
    /// reported to the caller.
    pub fn log_error(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        self.metrics.record_error_echo();
        self.write_diagnostic(&format!("ERROR - {}", message));
        let _ = self.log_message(LogLevel::Error, message);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(target) = self.target.as_ref() {
            target.lock().flush()?;
        }
        for appender in self.appenders.write().iter_mut() {
            appender.flush()?;
        }
        self.error_stream.lock().flush()?;
        Ok(())
    }

    /// Forward an entry to the extra appenders, reporting their failures
    fn dispatch(&self, entry: &LogEntry) {
        let mut appenders = self.appenders.write();
        for (idx, appender) in appenders.iter_mut().enumerate() {
            if let Err(e) = appender.append(entry) {
                self.write_diagnostic(&format!(
                    "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                    idx,
                    appender.name(),
                    e
                ));
            }
        }
    }

    fn write_diagnostic(&self, line: &str) {
        let mut stream = self.error_stream.lock();
        let _ = writeln!(stream, "{}", line);
        let _ = stream.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            self.write_diagnostic(&format!("[LOGGER ERROR] Failed to flush during shutdown: {}", e));
        }

        let failed = self.metrics.failed_writes();
        if failed > 0 {
            self.write_diagnostic(&format!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            ));
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use release_log::prelude::*;
///
/// let logger = Logger::builder()
///     .log_target("/tmp/release.log")
///     .min_level(LogLevel::Debug)
///     .level_alignment(LevelAlignment::Left)
///     .appender(ConsoleAppender::new())
///     .build();
/// assert!(logger.is_configured());
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appenders: Vec<Box<dyn Appender>>,
    error_stream: Option<ErrorStream>,
    clock: Option<Arc<dyn Clock>>,
    lock_file: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appenders: Vec::new(),
            error_stream: None,
            clock: None,
            lock_file: false,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_target(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_target = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_alignment(mut self, alignment: LevelAlignment) -> Self {
        self.config.formatter.level_alignment = alignment;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.formatter.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.formatter.output_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Send diagnostics somewhere other than stderr
    #[must_use = "builder methods return a new value"]
    pub fn error_stream<W: Write + Send + 'static>(mut self, stream: W) -> Self {
        self.error_stream = Some(Box::new(stream));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Lock the log target exclusively around each append
    #[cfg(feature = "file")]
    #[must_use = "builder methods return a new value"]
    pub fn file_lock(mut self, lock_file: bool) -> Self {
        self.lock_file = lock_file;
        self
    }

    /// Build after checking the configuration
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.build())
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::from_parts(
            self.config,
            self.error_stream
                .unwrap_or_else(|| Box::new(std::io::stderr())),
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.lock_file,
        );

        for appender in self.appenders {
            logger.add_appender(appender);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::other("disk on fire"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock::new(
            Local
                .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
                .single()
                .expect("unambiguous local time"),
        )
    }

    #[test]
    fn test_unconfigured_log_message_fails() {
        let stderr = SharedBuffer::default();
        let logger = Logger::builder().error_stream(stderr.clone()).build();

        let err = logger.log_message(LogLevel::Info, "hello").unwrap_err();
        assert!(err.is_not_configured());
        assert_eq!(stderr.contents(), "ERROR - log target not configured\n");
        assert_eq!(logger.metrics().unconfigured_attempts(), 1);
    }

    #[test]
    fn test_filtered_level_still_reports_missing_target() {
        let stderr = SharedBuffer::default();
        let logger = Logger::builder().error_stream(stderr.clone()).build();
        assert_eq!(logger.config().min_level, LogLevel::Info);

        let err = logger.log_debug("below min level").unwrap_err();
        assert!(err.is_not_configured());
        assert_eq!(stderr.contents(), "ERROR - log target not configured\n");
        assert_eq!(logger.metrics().unconfigured_attempts(), 1);
    }

    #[test]
    fn test_empty_target_is_unconfigured() {
        let stderr = SharedBuffer::default();
        let logger = Logger::builder()
            .log_target("")
            .error_stream(stderr.clone())
            .build();

        assert!(!logger.is_configured());
        assert!(logger.log_info("hello").is_err());
        assert!(stderr.contents().starts_with("ERROR -"));
    }

    #[test]
    fn test_log_error_echoes_without_target() {
        let stderr = SharedBuffer::default();
        let logger = Logger::builder().error_stream(stderr.clone()).build();

        logger.log_error("x");

        let output = stderr.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "ERROR - x");
        assert_eq!(lines[1], "ERROR - log target not configured");
        assert_eq!(logger.metrics().error_echoes(), 1);
    }

    #[test]
    fn test_log_info_writes_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.log");
        let stderr = SharedBuffer::default();

        let logger = Logger::builder()
            .log_target(&path)
            .clock(fixed_clock())
            .error_stream(stderr.clone())
            .build();

        logger.log_info("tagging").unwrap();
        logger.log_error("mirror down");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "2025-01-08 10:30:45 -  INFO - tagging\n2025-01-08 10:30:45 - ERROR - mirror down\n"
        );
        assert_eq!(stderr.contents(), "ERROR - mirror down\n");
        assert_eq!(logger.metrics().lines_written(), 2);
    }

    #[test]
    fn test_min_level_filters() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.log");

        let mut logger = Logger::builder().log_target(&path).build();
        logger.log_debug("hidden").unwrap();
        logger.set_min_level(LogLevel::Debug);
        logger.log_debug("shown").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("DEBUG - shown"));
    }

    #[test]
    fn test_current_timestamp_uses_clock() {
        let logger = Logger::builder().clock(fixed_clock()).build();
        assert_eq!(logger.current_timestamp(), "2025-01-08 10:30:45");

        let logger = Logger::builder()
            .clock(fixed_clock())
            .timestamp_format(TimestampFormat::Custom("%H:%M".to_string()))
            .build();
        assert_eq!(logger.current_timestamp(), "10:30");
    }

    #[test]
    fn test_invalid_custom_timestamp_logs_with_default_layout() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.log");
        let format = TimestampFormat::Custom("%Q".to_string());

        let rejected = Logger::builder()
            .log_target(&path)
            .timestamp_format(format.clone())
            .try_build();
        assert!(matches!(
            rejected,
            Err(LoggerError::InvalidTimestampFormat { .. })
        ));

        let logger = Logger::builder()
            .log_target(&path)
            .clock(fixed_clock())
            .timestamp_format(format)
            .build();
        assert_eq!(logger.current_timestamp(), "2025-01-08 10:30:45");
        logger.log_info("still written").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "2025-01-08 10:30:45 -  INFO - still written\n");
    }

    #[test]
    fn test_failing_appender_reported_not_propagated() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("release.log");
        let stderr = SharedBuffer::default();

        let logger = Logger::builder()
            .log_target(&path)
            .appender(FailingAppender)
            .error_stream(stderr.clone())
            .build();

        logger.log_info("still written").unwrap();

        assert!(stderr
            .contents()
            .contains("[LOGGER ERROR] Appender #0 (failing) failed: disk on fire"));
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_io_failure_surfaces() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("no-such-dir").join("release.log");

        let logger = Logger::builder()
            .log_target(&path)
            .error_stream(SharedBuffer::default())
            .build();

        let err = logger.log_info("x").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert_eq!(logger.metrics().failed_writes(), 1);
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert!(!logger.is_configured());
        assert_eq!(logger.config().min_level, LogLevel::Info);
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
