//! Clock handling for NexTrip departure times.
//!
//! NexTrip reports scheduled departures as bare "H:MM" / "HH:MM" strings on
//! a 12-hour dial, with no AM/PM marker. This module keeps the two sides of
//! that comparison apart: [`WallClock`] is an unambiguous local time of day,
//! [`DialTime`] is what the service printed.

use std::fmt;

use chrono::{Local, NaiveTime, Timelike};

/// Error returned when a clock-form departure string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time {input:?}: {reason}")]
pub struct ClockParseError {
    input: String,
    reason: &'static str,
}

impl ClockParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// The current local time of day, to minute precision.
///
/// # Examples
///
/// ```
/// use nextbus::domain::WallClock;
///
/// let now = WallClock::from_hm(13, 10).unwrap();
/// assert_eq!(now.hour(), 13);
/// assert_eq!(now.minute(), 10);
/// assert_eq!(now.to_string(), "13:10");
///
/// assert!(WallClock::from_hm(24, 0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallClock(NaiveTime);

impl WallClock {
    /// Build a wall clock from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(WallClock)
    }

    /// Read the system's local time, truncated to the minute.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl From<NaiveTime> for WallClock {
    fn from(time: NaiveTime) -> Self {
        // Seconds are dropped; the estimator works in whole minutes.
        let truncated = time.with_second(0).and_then(|t| t.with_nanosecond(0));
        WallClock(truncated.unwrap_or(time))
    }
}

impl fmt::Debug for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallClock({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A departure time as printed by the service: hour and minute read off a
/// 12-hour dial, half of day unknown.
///
/// Parsing removes the `:` separator and reads the rest as one integer
/// `T`, so "1:30" becomes 130 and "12:05" becomes 1205; the hour is
/// `T / 100` and the minute `T % 100`. No range checks beyond that are
/// applied: the service is trusted to send 1-12 and 00-59.
///
/// # Examples
///
/// ```
/// use nextbus::domain::DialTime;
///
/// let t = DialTime::parse("12:05").unwrap();
/// assert_eq!((t.hour(), t.minute()), (12, 5));
///
/// let t = DialTime::parse("1:30").unwrap();
/// assert_eq!((t.hour(), t.minute()), (1, 30));
///
/// assert!(DialTime::parse("Due").is_err());
/// assert!(DialTime::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialTime {
    hour: u32,
    minute: u32,
}

impl DialTime {
    pub fn parse(s: &str) -> Result<Self, ClockParseError> {
        let digits: String = s.trim().split(':').collect();

        if digits.is_empty() {
            return Err(ClockParseError::new(s, "empty time"));
        }

        let t: u32 = digits
            .parse()
            .map_err(|_| ClockParseError::new(s, "expected H:MM or HH:MM"))?;

        Ok(Self {
            hour: t / 100,
            minute: t % 100,
        })
    }

    /// Hour as printed, normally 1-12.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for DialTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}
