//! `LocalTimestamp` — a jurisdiction-local calendar date and wall-clock time.
//!
//! The surcharge rules look at the hour, the weekday, and the holiday status
//! of the moment a service is requested.  All three are read from the local
//! calendar date carried here; nothing is ever re-derived from an instant and
//! a time zone, so two evaluators given the same `LocalTimestamp` always
//! classify it identically.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use tariff_core::errors::{Error, Result};

use crate::date::Date;
use crate::weekday::Weekday;

/// Accepted textual layouts, tried in order.
const FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// A local calendar date with hour and minute.
///
/// Serialized as `"YYYY-MM-DDTHH:MM"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalTimestamp {
    date: Date,
    hour: u8,
    minute: u8,
}

impl LocalTimestamp {
    /// Create a timestamp from a date and a wall-clock time.
    pub fn new(date: Date, hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Date(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Date(format!("minute {minute} out of range [0, 59]")));
        }
        Ok(Self { date, hour, minute })
    }

    /// Create a timestamp from its components.
    pub fn from_ymd_hm(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self> {
        Self::new(Date::from_ymd(year, month, day)?, hour, minute)
    }

    /// Local wall-clock reading of a zoned date-time.
    ///
    /// The caller picks the zone; it should be the zone of the place where
    /// the service is delivered.
    pub fn from_zoned<Tz: TimeZone>(dt: &chrono::DateTime<Tz>) -> Result<Self> {
        Self::try_from(dt.naive_local())
    }

    /// The local calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Hour of the day (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Day of the week of the local date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

impl TryFrom<NaiveDateTime> for LocalTimestamp {
    type Error = Error;
    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        let date = Date::try_from(dt.date())?;
        Self::new(date, dt.hour() as u8, dt.minute() as u8)
    }
}

impl FromStr for LocalTimestamp {
    type Err = Error;

    /// Parse `YYYY-MM-DDTHH:MM` (seconds and a space separator are accepted).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .ok_or_else(|| Error::Parse(format!("invalid local timestamp {s:?}")))
            .and_then(Self::try_from)
    }
}

impl TryFrom<String> for LocalTimestamp {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<LocalTimestamp> for String {
    fn from(ts: LocalTimestamp) -> String {
        ts.to_string()
    }
}

impl std::fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}",
            self.date.to_iso_string(),
            self.hour,
            self.minute
        )
    }
}

impl std::fmt::Debug for LocalTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalTimestamp({self})")
    }
}
