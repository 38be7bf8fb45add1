//! # Release Log
//!
//! Logging and elapsed-time helpers shared by release-engineering tools.
//!
//! - **Duration formatting**: `3661` seconds renders as `"1h 1m 1s"`
//! - **Log lines**: `"<timestamp> - <level> - <message>"` appended to one file
//! - **Error echo**: `log_error` always reaches stderr, even without a log file
//!
//! ```no_run
//! use release_log::prelude::*;
//!
//! let logger = Logger::new(LoggerConfig::from_env());
//! let watch = Stopwatch::start();
//! // ... build and upload ...
//! if let Err(e) = logger.log_info(format!("upload finished in {}", watch.formatted())) {
//!     eprintln!("could not write release log: {}", e);
//! }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        current_timestamp, format_duration, format_duration_signed, format_elapsed, Appender,
        Clock, FixedClock, FormatterConfig, LevelAlignment, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Result, Stopwatch,
        SystemClock, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    current_timestamp, format_duration, format_duration_signed, format_elapsed, Appender, Clock,
    FixedClock, FormatterConfig, LevelAlignment, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Result, Stopwatch, SystemClock,
    TimestampFormat, LOG_TARGET_ENV,
};
