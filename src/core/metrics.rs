//! Logger metrics
//!
//! Counters for lines written, failed writes, attempts made without a log
//! target and error-stream echoes.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use release_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines appended to the log target
    lines_written: AtomicU64,

    /// Appends that failed with an IO or lock error
    failed_writes: AtomicU64,

    /// Calls made while no log target was configured
    unconfigured_attempts: AtomicU64,

    /// `ERROR - ...` lines echoed to the error stream
    error_echoes: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            unconfigured_attempts: AtomicU64::new(0),
            error_echoes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unconfigured_attempts(&self) -> u64 {
        self.unconfigured_attempts.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn error_echoes(&self) -> u64 {
        self.error_echoes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_unconfigured(&self) -> u64 {
        self.unconfigured_attempts.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_error_echo(&self) -> u64 {
        self.error_echoes.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed share of all write attempts, as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = (self.failed_writes() + self.unconfigured_attempts()) as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
        self.unconfigured_attempts.store(0, Ordering::Relaxed);
        self.error_echoes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            failed_writes: AtomicU64::new(self.failed_writes()),
            unconfigured_attempts: AtomicU64::new(self.unconfigured_attempts()),
            error_echoes: AtomicU64::new(self.error_echoes()),
        }
    }
}
