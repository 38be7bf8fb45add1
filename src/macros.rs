//! Logging macros with `format!`-style arguments.
//!
//! `log!`, `debug!`, `info!` and `warn!` evaluate to the `Result` of the
//! write; `error!` echoes to the error stream and returns nothing.
//!
//! # Examples
//!
//! ```no_run
//! use release_log::prelude::*;
//! use release_log::{error, info};
//!
//! let logger = Logger::new(LoggerConfig::new().with_log_target("/var/log/release.log"));
//!
//! let version = "60.0";
//! info!(logger, "Starting release of {}", version)?;
//! error!(logger, "Signing failed for {} locales", 3);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at the given level.
///
/// ```no_run
/// # use release_log::prelude::*;
/// # let logger = Logger::default();
/// use release_log::log;
/// let _ = log!(logger, LogLevel::Warn, "Mirror {} is slow", "ftp");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_message($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Echo an error to the error stream and log it.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_error(format!($($arg)+))
    };
}
