//! `HolidayCalendar` trait and the empty calendar.
//!
//! A holiday calendar classifies calendar dates.  Only the year-month-day of
//! a date matters; time of day never enters the decision.

use crate::date::{days_in_year, Date};

/// A public-holiday calendar for one jurisdiction.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Belgium"`).
    fn name(&self) -> &str;

    /// Name of the holiday falling on `date`, or `None` for an ordinary day.
    fn holiday_name(&self, date: Date) -> Option<&str>;

    /// Return `true` if `date` is a public holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// All holidays of `year`, in date order.
    ///
    /// A day on which two holidays coincide appears once.  The set is
    /// rebuilt on every call.
    fn holidays_in_year(&self, year: u16) -> Vec<Date> {
        let Ok(first) = Date::from_ymd(year, 1, 1) else {
            return Vec::new();
        };
        (0..days_in_year(year) as i32)
            .filter_map(|offset| first.add_days(offset).ok())
            .filter(|d| self.is_holiday(*d))
            .collect()
    }
}

/// A calendar without holidays.
///
/// Useful to isolate the weekday and time-of-day surcharges.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl HolidayCalendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn holiday_name(&self, _date: Date) -> Option<&str> {
        None
    }
}
