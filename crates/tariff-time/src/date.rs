//! `Date` type.
//!
//! Dates are stored as a serial day number in the proleptic Gregorian
//! calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tariff_core::errors::{Error, Result};

use crate::month::{is_leap_year, Month};
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
///
/// Serialized as an ISO 8601 string (`"2024-12-25"`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        let Some(mon) = Month::from_number(month) else {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        };
        let days_in = mon.length(year);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, mon, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1.number()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        m.days_before(y) + d as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The `day_of_year`-th day of `year` (1 = January 1).
    pub(crate) fn from_year_and_day(year: u16, day_of_year: u16) -> Result<Self> {
        let first = Date::from_ymd(year, 1, 1)?;
        first.add_days(day_of_year as i32 - 1)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{d} {m} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl Date {
    /// ISO 8601 representation (`"2024-12-25"`).
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{:02}-{d:02}", m.number())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let parsed = chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Parse(format!("invalid date {s:?}: {e}")))?;
        Date::try_from(parsed)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_iso_string()
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Days from 0001-01-01 to January 1 of `year`.
fn days_before_year(year: u16) -> i32 {
    let y = year as i32 - 1;
    365 * y + y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: u16, month: Month, day: u8) -> i32 {
    days_before_year(year) + month.days_before(year) as i32 + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, Month, u8) {
    // 146_097 days per 400-year cycle; the estimate is off by at most one.
    let mut y = (((serial - 1) as i64 * 400 / 146_097) + 1).clamp(1, 9999) as u16;
    while y > 1 && serial <= days_before_year(y) {
        y -= 1;
    }
    while y < 9999 && serial > days_before_year(y + 1) {
        y += 1;
    }
    let mut remaining = (serial - days_before_year(y)) as u16;
    let mut m = Month::January;
    loop {
        let days = m.length(y) as u16;
        if remaining <= days {
            break;
        }
        remaining -= days;
        match Month::from_number(m.number() + 1) {
            Some(next) => m = next,
            None => break,
        }
    }
    (y, m, remaining as u8)
}

/// Number of days in `year`.
pub fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
