//! Julian Day conversion for civil calendar dates
//!
//! This module converts proleptic Gregorian calendar fields into the
//! continuous Julian Day count used as the astronomical time axis, and back.
//!
//! The conversion works on calendar *fields*, not on instants: a timestamp
//! carrying a UTC offset contributes its wall-clock year, month, day and time
//! unchanged. Callers who want the Julian Day of an instant in UT should pass
//! a UTC value.

use crate::constants::DAY_S;
use crate::{CalendarError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar tuple for representing a date and time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTuple {
    /// Create a calendar tuple from its fields
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Time of day as a fraction of a day
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second) / DAY_S
    }

    /// Whether the date falls before 1582-10-15, the first Gregorian day
    pub fn is_before_gregorian_reform(&self) -> bool {
        (self.year, self.month, self.day) < (1582, 10, 15)
    }
}

impl fmt::Display for CalendarTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl From<(i32, u32, u32)> for CalendarTuple {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }
}

impl From<(i32, u32, u32, u32, u32, f64)> for CalendarTuple {
    fn from((year, month, day, hour, minute, second): (i32, u32, u32, u32, u32, f64)) -> Self {
        Self::new(year, month, day, hour, minute, second)
    }
}

impl From<NaiveDate> for CalendarTuple {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day(), 0, 0, 0.0)
    }
}

impl From<NaiveDateTime> for CalendarTuple {
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        )
    }
}

/// Takes the wall-clock fields as written in the value's own offset
impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarTuple {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from(dt.naive_local())
    }
}

impl From<::time::PrimitiveDateTime> for CalendarTuple {
    fn from(dt: ::time::PrimitiveDateTime) -> Self {
        Self::new(
            dt.year(),
            u8::from(dt.month()) as u32,
            dt.day() as u32,
            dt.hour() as u32,
            dt.minute() as u32,
            dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        )
    }
}

/// Takes the wall-clock fields as written in the value's own offset
impl From<::time::OffsetDateTime> for CalendarTuple {
    fn from(dt: ::time::OffsetDateTime) -> Self {
        Self::from(::time::PrimitiveDateTime::new(dt.date(), dt.time()))
    }
}

/// Calculate the Julian Day for a proleptic Gregorian date and time
///
/// This follows Meeus, *Astronomical Algorithms*, chapter 7. The result is
/// only meaningful from 1582-10-15 on; earlier dates are computed with the
/// same formula and a warning is logged.
///
/// # Examples
///
/// ```rust
/// use ganzhi::julian_day;
///
/// assert_eq!(julian_day((2000, 1, 1, 12, 0, 0.0)), 2451545.0);
/// assert_eq!(julian_day((1999, 1, 1)), 2451179.5);
/// ```
pub fn julian_day<T: Into<CalendarTuple>>(date: T) -> f64 {
    let cal = date.into();
    if cal.is_before_gregorian_reform() {
        log::warn!(
            "julian day requested for {}, before the Gregorian calendar began",
            cal
        );
    }

    let (mut y, mut m) = (cal.year as f64, cal.month as f64);
    if cal.month < 3 {
        y -= 1.0;
        m += 12.0;
    }
    let d = cal.day as f64 + cal.day_fraction();

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5
}

/// Julian day number of 0000-12-31, the day before chrono's first day of the
/// common era
const JDN_OF_CE_DAY_ZERO: i64 = 1_721_425;

/// Validate calendar fields as a proleptic Gregorian date
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        log::debug!("rejected calendar date {}-{}-{}", year, month, day);
        CalendarError::InvalidCalendarDate(format!("{:04}-{:02}-{:02}", year, month, day))
    })
}

/// Julian day number of a date: the integer day count of the noon that
/// falls on it
pub fn day_number(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + JDN_OF_CE_DAY_ZERO
}

/// Julian day number of calendar fields
///
/// Fails with [`CalendarError::InvalidCalendarDate`] for fields that name no
/// day, such as February 30th or month 13.
///
/// # Examples
///
/// ```rust
/// use ganzhi::time::julian_day_number;
///
/// assert_eq!(julian_day_number(1949, 10, 1), Ok(2433191));
/// assert!(julian_day_number(2023, 2, 29).is_err());
/// ```
pub fn julian_day_number(year: i32, month: u32, day: u32) -> Result<i64> {
    civil_date(year, month, day).map(day_number)
}

/// The date carrying a Julian day number
pub fn date_from_day_number(jdn: i64) -> Result<NaiveDate> {
    jdn.checked_sub(JDN_OF_CE_DAY_ZERO)
        .and_then(|days| i32::try_from(days).ok())
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| {
            let message = format!("julian day number {} is out of range", jdn);
            CalendarError::InvalidCalendarDate(message)
        })
}

impl CalendarTuple {
    /// Calendar fields of a Julian Day, the inverse of [`julian_day`]
    pub fn from_julian_day(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(CalendarError::InvalidCalendarDate(format!("julian day {}", jd)));
        }
        // Julian days turn over at noon
        let from_midnight = jd + 0.5;
        let whole_days = from_midnight.floor();
        let date = date_from_day_number(whole_days as i64)?;

        let seconds = (from_midnight - whole_days) * DAY_S;
        let hour = (seconds / 3600.0).floor() as u32;
        let minute = ((seconds - hour as f64 * 3600.0) / 60.0).floor() as u32;

        Ok(Self::new(
            date.year(),
            date.month(),
            date.day(),
            hour,
            minute,
            seconds - hour as f64 * 3600.0 - minute as f64 * 60.0,
        ))
    }
}
