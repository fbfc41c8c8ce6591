//! # tariff-time
//!
//! Date, local timestamp, Easter, and holiday calendar types.
//!
//! Everything here works on *local calendar dates*: a [`LocalTimestamp`]
//! carries the date and wall-clock time of the jurisdiction the service is
//! delivered in, so weekday and holiday classification never depends on the
//! time zone of whoever evaluates it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// Concrete calendar implementations (jurisdiction specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// Gregorian Easter computation.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `LocalTimestamp` — a local calendar date plus wall-clock time.
pub mod timestamp;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, NullCalendar};
pub use calendars::belgium::Belgium;
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use date::Date;
pub use easter::{easter_day_of_year, easter_month_day, easter_sunday};
pub use month::Month;
pub use timestamp::LocalTimestamp;
pub use weekday::Weekday;
