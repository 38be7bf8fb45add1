//! Elapsed-time formatting
//!
//! Renders a count of seconds as `"{H}h {M}m {S}s"`, the form release
//! tooling reports step durations in.

use super::error::{LoggerError, Result};
use std::time::{Duration, Instant};

const SECS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;

/// Format a whole number of seconds as `"{H}h {M}m {S}s"`
///
/// No zero padding and no upper bound on hours.
///
/// # Examples
///
/// ```
/// use release_log::format_duration;
///
/// assert_eq!(format_duration(59), "0h 0m 59s");
/// assert_eq!(format_duration(3661), "1h 1m 1s");
/// ```
#[must_use]
pub fn format_duration(total_seconds: u64) -> String {
    let (hours, minutes, seconds) = if total_seconds < SECS_PER_MINUTE {
        (0, 0, total_seconds)
    } else {
        let total_minutes = total_seconds / SECS_PER_MINUTE;
        let seconds = total_seconds % SECS_PER_MINUTE;
        if total_minutes < MINUTES_PER_HOUR {
            (0, total_minutes, seconds)
        } else {
            (
                total_minutes / MINUTES_PER_HOUR,
                total_minutes % MINUTES_PER_HOUR,
                seconds,
            )
        }
    };

    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// Format a signed number of seconds, rejecting negative values
pub fn format_duration_signed(seconds: i64) -> Result<String> {
    let total = u64::try_from(seconds).map_err(|_| LoggerError::negative_duration(seconds))?;
    Ok(format_duration(total))
}

/// Format a [`Duration`], truncating the sub-second part
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format_duration(elapsed.as_secs())
}

/// Measures how long a release step took
///
/// # Examples
///
/// ```
/// use release_log::Stopwatch;
///
/// let watch = Stopwatch::start();
/// // ... run the step ...
/// assert!(watch.formatted().ends_with('s'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Start from an earlier instant
    #[must_use]
    pub fn started_at(started: Instant) -> Self {
        Self { started }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Elapsed time as `"{H}h {M}m {S}s"`
    pub fn formatted(&self) -> String {
        format_elapsed(self.elapsed())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
