//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Uses the system time zone unless another zone is given with
/// [`LocalDateTime::in_zone`].
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: Option<&'a TimeZone>,
}

impl<'a> LocalDateTime<'a> {
    /// Formats in the system time zone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            time_zone: None,
        }
    }

    /// Formats in the given time zone.
    pub fn in_zone(timestamp: &'a Timestamp, time_zone: &'a TimeZone) -> Self {
        Self {
            timestamp,
            time_zone: Some(time_zone),
        }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time_zone = self.time_zone.cloned().unwrap_or_else(TimeZone::system);
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(time_zone)
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a number of seconds as `1h 05m` or `45m`.
pub struct ElapsedTime(pub u64);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;

        if hours > 0 {
            write!(f, "{hours}h {minutes:02}m")
        } else {
            write!(f, "{minutes}m")
        }
    }
}
