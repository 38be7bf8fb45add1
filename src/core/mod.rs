//! Core logger types and traits

pub mod appender;
pub mod clock;
pub mod config;
pub mod elapsed;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use clock::{current_timestamp, Clock, FixedClock, SystemClock};
pub use config::{LoggerConfig, LOG_TARGET_ENV};
pub use elapsed::{format_duration, format_duration_signed, format_elapsed, Stopwatch};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::{LevelAlignment, LogLevel, LEVEL_WIDTH};
pub use logger::{ErrorStream, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{FormatterConfig, OutputFormat};
pub use timestamp::{TimestampFormat, LOCAL_DATETIME_FORMAT};
