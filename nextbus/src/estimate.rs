//! Arrival estimation.
//!
//! Turns a departure's raw text plus the current wall-clock time into the
//! number of minutes until the bus arrives.
//!
//! Countdown ("5 Min") and due ("Due") texts pass straight through. Dial
//! times ("1:30") carry no AM/PM marker, so the half of day is inferred
//! from the current hour using a fixed branch table:
//!
//! | Branch            | When                               | Dial hour read as |
//! |-------------------|------------------------------------|-------------------|
//! | Midnight rollover | now is 00:xx and dial hour is 12   | 0                 |
//! | Morning           | now is before 12:00                | as printed        |
//! | Noon crossing     | now is 12:xx and dial hour is 1    | 13                |
//! | Noon              | now is 12:xx, any other dial hour  | 12, or h + 12     |
//! | Afternoon         | now is 13:00 or later              | h + 12            |
//!
//! Only one hour of lookahead is modelled: a departure in a later hour is
//! counted as "next hour", so clock-form departures more than about an
//! hour out come back short. Negative intermediate results (the departure
//! minute already passed within the hour) are clamped to zero.

use std::fmt;

use tracing::debug;

use crate::domain::{ClockParseError, DepartureForm, DialTime, WallClock};

/// Which row of the branch table produced a clock-form estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockBranch {
    MidnightRollover,
    Morning,
    NoonCrossing,
    Noon,
    Afternoon,
}

/// The result of estimating a departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrivalEstimate {
    /// The service already gave a countdown; the text is kept verbatim.
    Countdown(String),
    /// The service says the bus is arriving now.
    Due(String),
    /// Minutes until arrival, derived from a dial time.
    Minutes { minutes: u32, branch: ClockBranch },
}

impl ArrivalEstimate {
    /// Minutes until arrival, where known as a number.
    ///
    /// `Due` counts as zero. Countdown texts are not re-parsed.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            ArrivalEstimate::Countdown(_) => None,
            ArrivalEstimate::Due(_) => Some(0),
            ArrivalEstimate::Minutes { minutes, .. } => Some(*minutes),
        }
    }
}

impl fmt::Display for ArrivalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // "5 Min" reads as "5 Minutes".
            ArrivalEstimate::Countdown(text) => {
                write!(f, "The next bus will arrive in {text}utes")
            }
            ArrivalEstimate::Due(text) => write!(f, "The next bus is {text}"),
            ArrivalEstimate::Minutes { minutes, .. } => {
                write!(f, "The next bus will arrive in {minutes} minutes")
            }
        }
    }
}

/// Estimate the arrival for a departure text at wall-clock time `now`.
///
/// # Examples
///
/// ```
/// use nextbus::domain::WallClock;
/// use nextbus::estimate::{estimate, ArrivalEstimate};
///
/// let now = WallClock::from_hm(11, 50).unwrap();
/// assert_eq!(estimate("12:05", now).unwrap().minutes(), Some(15));
///
/// assert_eq!(
///     estimate("5 Min", now).unwrap(),
///     ArrivalEstimate::Countdown("5 Min".to_string())
/// );
/// assert!(estimate("soon", now).is_err());
/// ```
pub fn estimate(departure_text: &str, now: WallClock) -> Result<ArrivalEstimate, ClockParseError> {
    match DepartureForm::classify(departure_text) {
        DepartureForm::Countdown(text) => Ok(ArrivalEstimate::Countdown(text.to_string())),
        DepartureForm::Due(text) => Ok(ArrivalEstimate::Due(text.to_string())),
        DepartureForm::Clock(text) => {
            let dial = DialTime::parse(text)?;
            let (raw, branch) = minutes_until(dial, now);

            if raw < 0 {
                debug!(%dial, %now, raw, ?branch, "departure already passed within the hour");
            }

            // The dial minute is `value % 100`, so raw lies in -59..=159.
            let minutes = u32::try_from(raw.max(0)).unwrap_or(0);
            Ok(ArrivalEstimate::Minutes { minutes, branch })
        }
    }
}

/// Signed minutes from `now` until `dial`, and the branch that decided it.
///
/// This is the unclamped arithmetic; [`estimate`] clamps it at zero.
pub fn minutes_until(dial: DialTime, now: WallClock) -> (i64, ClockBranch) {
    let current_hour = i64::from(now.hour());
    let current_minute = i64::from(now.minute());
    let dial_hour = i64::from(dial.hour());
    let dial_minute = i64::from(dial.minute());

    if current_hour == 0 && dial_hour == 12 {
        // "12" straight after midnight is this hour, not noon.
        return (dial_minute - current_minute, ClockBranch::MidnightRollover);
    }

    if current_hour < 12 {
        let diff_hour = dial_hour - current_hour;
        return (
            within_one_hour(diff_hour, dial_minute, current_minute),
            ClockBranch::Morning,
        );
    }

    if current_hour == 12 {
        let effective_hour = if dial_hour == 12 { 12 } else { dial_hour + 12 };
        if effective_hour == 13 {
            return (60 - (current_minute - dial_minute), ClockBranch::NoonCrossing);
        }
        let diff_hour = effective_hour - current_hour;
        return (
            within_one_hour(diff_hour, dial_minute, current_minute),
            ClockBranch::Noon,
        );
    }

    let diff_hour = (dial_hour + 12) - current_hour;
    (
        within_one_hour(diff_hour, dial_minute, current_minute),
        ClockBranch::Afternoon,
    )
}

/// Any later hour counts as the next hour.
fn within_one_hour(diff_hour: i64, dial_minute: i64, current_minute: i64) -> i64 {
    if diff_hour > 0 {
        60 + (dial_minute - current_minute)
    } else {
        dial_minute - current_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> WallClock {
        WallClock::from_hm(h, m).unwrap()
    }

    fn minutes(text: &str, now: WallClock) -> (u32, ClockBranch) {
        match estimate(text, now).unwrap() {
            ArrivalEstimate::Minutes { minutes, branch } => (minutes, branch),
            other => panic!("expected clock estimate, got {other:?}"),
        }
    }

    #[test]
    fn countdown_passes_through() {
        let est = estimate("5 Min", at(9, 0)).unwrap();
        assert_eq!(est, ArrivalEstimate::Countdown("5 Min".to_string()));
        assert!(est.to_string().contains('5'));
        assert_eq!(est.to_string(), "The next bus will arrive in 5 Minutes");
        assert_eq!(est.minutes(), None);
    }

    #[test]
    fn due_passes_through() {
        let est = estimate("Due", at(9, 0)).unwrap();
        assert_eq!(est, ArrivalEstimate::Due("Due".to_string()));
        assert_eq!(est.minutes(), Some(0));
        assert_eq!(est.to_string(), "The next bus is Due");
    }

    #[test]
    fn clock_yields_minutes() {
        let est = estimate("1:30", at(13, 10)).unwrap();
        assert!(matches!(est, ArrivalEstimate::Minutes { .. }));
        assert_eq!(est.to_string(), "The next bus will arrive in 20 minutes");
    }

    #[test]
    fn malformed_clock_is_parse_error() {
        let err = estimate("soon", at(9, 0)).unwrap_err();
        assert_eq!(err.input(), "soon");
        assert!(estimate("", at(9, 0)).is_err());
    }

    #[test]
    fn morning_next_hour() {
        // 11:50, "12:05": dial hour 12 is one hour ahead.
        assert_eq!(minutes("12:05", at(11, 50)), (15, ClockBranch::Morning));
    }

    #[test]
    fn morning_same_hour() {
        assert_eq!(minutes("9:40", at(9, 15)), (25, ClockBranch::Morning));
    }

    #[test]
    fn afternoon_same_hour() {
        // 13:10, "1:15": dial hour 1 reads as 13.
        assert_eq!(minutes("1:15", at(13, 10)), (5, ClockBranch::Afternoon));
    }

    #[test]
    fn afternoon_next_hour() {
        assert_eq!(minutes("6:05", at(17, 45)), (20, ClockBranch::Afternoon));
    }

    #[test]
    fn midnight_rollover() {
        // 00:05, "12:20": the 12 is this midnight hour.
        assert_eq!(minutes("12:20", at(0, 5)), (15, ClockBranch::MidnightRollover));
    }

    #[test]
    fn midnight_rollover_already_passed_clamps_to_zero() {
        // 00:50, "12:10": the midnight row wins over the morning row, which
        // would have read "12" as eleven hours ahead and answered 20.
        let (raw, branch) = minutes_until(DialTime::parse("12:10").unwrap(), at(0, 50));
        assert_eq!(raw, -40);
        assert_eq!(branch, ClockBranch::MidnightRollover);
        assert_eq!(minutes("12:10", at(0, 50)), (0, ClockBranch::MidnightRollover));
    }

    #[test]
    fn out_of_range_dial_minute_stays_bounded() {
        // The service is trusted, so "1:99" is read as minute 99, not rejected.
        assert_eq!(minutes("1:99", at(13, 0)), (99, ClockBranch::Afternoon));
        assert_eq!(minutes("2:99", at(13, 0)), (159, ClockBranch::Afternoon));
    }

    #[test]
    fn midnight_hour_other_dial_hours_use_morning() {
        assert_eq!(minutes("1:10", at(0, 50)), (20, ClockBranch::Morning));
    }

    #[test]
    fn noon_crossing() {
        // 12:50, "1:05": 60 - (50 - 5).
        assert_eq!(minutes("1:05", at(12, 50)), (15, ClockBranch::NoonCrossing));
    }

    #[test]
    fn noon_same_hour() {
        assert_eq!(minutes("12:40", at(12, 10)), (30, ClockBranch::Noon));
    }

    #[test]
    fn departure_already_passed_clamps_to_zero() {
        let (raw, branch) = minutes_until(DialTime::parse("9:10").unwrap(), at(9, 30));
        assert_eq!(raw, -20);
        assert_eq!(branch, ClockBranch::Morning);
        assert_eq!(minutes("9:10", at(9, 30)), (0, ClockBranch::Morning));
    }

    #[test]
    fn lookahead_is_one_hour() {
        // Three hours out still counts as "next hour".
        assert_eq!(minutes("11:20", at(8, 10)), (70, ClockBranch::Morning));
    }
}
