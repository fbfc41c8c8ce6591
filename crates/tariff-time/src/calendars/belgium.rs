//! Belgium public-holiday calendar.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::easter::easter_day_of_year;

/// Belgian public holidays.
///
/// Fixed holidays:
/// * New Year's Day (Jan 1)
/// * Labour Day (May 1)
/// * National Day (Jul 21)
/// * Assumption (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Armistice Day (Nov 11)
/// * Christmas Day (Dec 25)
///
/// Movable holidays, relative to Easter Sunday (es):
/// * Easter Sunday (es)
/// * Easter Monday (es+1)
/// * Ascension Thursday (es+39)
/// * Pentecost (es+49)
/// * Whit Monday (es+50)
///
/// The Easter date is always taken from the calendar year of the date being
/// classified.
#[derive(Debug, Clone, Copy, Default)]
pub struct Belgium;

impl HolidayCalendar for Belgium {
    fn name(&self) -> &str {
        "Belgium"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let m = date.month();
        let d = date.day_of_month();

        let fixed = match (m, d) {
            (1, 1) => Some("New Year's Day"),
            (5, 1) => Some("Labour Day"),
            (7, 21) => Some("National Day"),
            (8, 15) => Some("Assumption"),
            (11, 1) => Some("All Saints' Day"),
            (11, 11) => Some("Armistice Day"),
            (12, 25) => Some("Christmas Day"),
            _ => None,
        };
        if fixed.is_some() {
            return fixed;
        }

        let dd = date.day_of_year() as i32;
        let es = easter_day_of_year(date.year()) as i32;
        match dd - es {
            0 => Some("Easter Sunday"),
            1 => Some("Easter Monday"),
            39 => Some("Ascension Day"),
            49 => Some("Pentecost"),
            50 => Some("Whit Monday"),
            _ => None,
        }
    }
}
