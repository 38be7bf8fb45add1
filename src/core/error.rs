//! Error types for the release logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// No log target path was configured (unset or empty)
    #[error("log target not configured")]
    LogTargetNotConfigured,

    /// A duration in seconds was negative
    #[error("negative duration: {seconds}s")]
    NegativeDuration { seconds: i64 },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Custom timestamp pattern that chrono cannot render
    #[error("invalid strftime pattern '{pattern}'")]
    InvalidTimestampFormat { pattern: String },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError { path: String },

    /// Failure reported by a custom appender
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn negative_duration(seconds: i64) -> Self {
        LoggerError::NegativeDuration { seconds }
    }

    pub fn invalid_timestamp_format(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidTimestampFormat {
            pattern: pattern.into(),
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>) -> Self {
        LoggerError::FileLockError { path: path.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for the missing-target failure
    pub fn is_not_configured(&self) -> bool {
        matches!(self, LoggerError::LogTargetNotConfigured)
    }
}
