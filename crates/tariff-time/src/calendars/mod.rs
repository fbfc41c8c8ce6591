//! Jurisdiction-specific and user-defined holiday calendars.

/// Belgian public holidays.
pub mod belgium;

/// Calendar extended with explicitly added dates.
pub mod bespoke_calendar;
