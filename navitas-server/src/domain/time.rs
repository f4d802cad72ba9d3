//! Reservation time and date handling.
//!
//! Reservation text prints times on a 12-hour clock with a trailing meridiem
//! marker ("10:15A", "2:15P") and dates as a day number plus month
//! abbreviation with no year ("10Aug"). This module converts those tokens into
//! chrono values for the storage side; the parser itself keeps them raw.

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time or date token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local wall-clock time parsed from a 12-hour meridiem token.
///
/// # Examples
///
/// ```
/// use navitas_server::domain::ClockTime;
///
/// let t = ClockTime::parse_meridiem("2:15P").unwrap();
/// assert_eq!(t.to_string(), "14:15");
///
/// let midnight = ClockTime::parse_meridiem("12:05A").unwrap();
/// assert_eq!(midnight.to_string(), "00:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "H:MMA", "HH:MMA", "H:MMP" or "HH:MMP" format.
    ///
    /// Hours must be 1-12; "12:xxA" is just after midnight and "12:xxP" is
    /// just after noon.
    ///
    /// ```
    /// use navitas_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_meridiem("11:43A").is_ok());
    /// assert!(ClockTime::parse_meridiem("11:43").is_err());
    /// assert!(ClockTime::parse_meridiem("13:00P").is_err());
    /// assert!(ClockTime::parse_meridiem("0:30A").is_err());
    /// ```
    pub fn parse_meridiem(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        let (clock, marker) = match bytes.split_last() {
            Some((&marker, clock)) => (clock, marker),
            None => return Err(TimeError::new("expected H:MM followed by A or P")),
        };
        let pm = match marker {
            b'A' => false,
            b'P' => true,
            _ => return Err(TimeError::new("expected trailing A or P")),
        };

        // Must be H:MM or HH:MM
        let colon = match clock.len() {
            4 => 1,
            5 => 2,
            _ => return Err(TimeError::new("expected H:MM followed by A or P")),
        };
        if clock[colon] != b':' {
            return Err(TimeError::new("expected colon before minutes"));
        }

        let hour = match colon {
            1 => (clock[0] as char).to_digit(10),
            _ => parse_two_digits(&clock[0..2]),
        }
        .ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new("hour must be 1-12"));
        }

        let minute = parse_two_digits(&clock[colon + 1..])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the underlying chrono time.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Resolve a reservation date token such as "10Aug" against a travel year.
///
/// The month abbreviation is matched case-insensitively.
///
/// # Examples
///
/// ```
/// use navitas_server::domain::parse_travel_date;
/// use chrono::NaiveDate;
///
/// let date = parse_travel_date("29Jun", 2025).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 29).unwrap());
///
/// assert!(parse_travel_date("31Feb", 2025).is_err());
/// assert!(parse_travel_date("10Foo", 2025).is_err());
/// ```
pub fn parse_travel_date(raw: &str, year: i32) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(&format!("{raw}{year}"), "%d%b%Y").map_err(|e| match e.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
            TimeError::new("day does not exist in month")
        }
        _ => TimeError::new("expected day number and month abbreviation"),
    })
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
