//! Wall-clock source for log timestamps

use super::timestamp::LOCAL_DATETIME_FORMAT;
use chrono::{DateTime, Local};
use std::fmt;

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant
#[derive(Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl fmt::Debug for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedClock")
            .field(&self.0.format(LOCAL_DATETIME_FORMAT).to_string())
            .finish()
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`
///
/// ```
/// let ts = release_log::current_timestamp();
/// assert_eq!(ts.len(), "2025-01-08 10:30:45".len());
/// ```
#[must_use]
pub fn current_timestamp() -> String {
    SystemClock.now().format(LOCAL_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock() {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("unambiguous local time");
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
        assert!(format!("{:?}", clock).contains("2025-01-08 10:30:45"));
    }

    #[test]
    fn test_current_timestamp_shape() {
        let ts = current_timestamp();
        let bytes = ts.as_bytes();
        assert_eq!(bytes.len(), 19);
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, LOCAL_DATETIME_FORMAT).is_ok());
    }
}
