//! Bespoke calendar — a base calendar extended with explicit dates.
//!
//! Regional observances and one-off closures that a jurisdiction calendar
//! does not know about are added here at run time.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::calendar::{HolidayCalendar, NullCalendar};
use crate::date::Date;

/// A calendar with user-defined holidays layered over a base calendar.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    base: Arc<dyn HolidayCalendar>,
    extra: BTreeMap<Date, String>,
}

impl BespokeCalendar {
    /// Create a calendar with no holidays of its own on top of `base`.
    pub fn new(name: impl Into<String>, base: Arc<dyn HolidayCalendar>) -> Self {
        Self {
            name: name.into(),
            base,
            extra: BTreeMap::new(),
        }
    }

    /// Create a calendar whose only holidays are the ones added to it.
    pub fn standalone(name: impl Into<String>) -> Self {
        Self::new(name, Arc::new(NullCalendar))
    }

    /// Add a holiday.  A label already registered for `date` is replaced.
    pub fn add_holiday(&mut self, date: Date, label: impl Into<String>) {
        self.extra.insert(date, label.into());
    }

    /// Remove a previously added holiday.  Holidays of the base calendar
    /// cannot be removed.
    pub fn remove_holiday(&mut self, date: Date) {
        self.extra.remove(&date);
    }

    /// Return the number of explicitly added holidays.
    pub fn holiday_count(&self) -> usize {
        self.extra.len()
    }
}

impl HolidayCalendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.base
            .holiday_name(date)
            .or_else(|| self.extra.get(&date).map(String::as_str))
    }
}
