//! Gregorian Easter Sunday.
//!
//! Anonymous Gregorian algorithm (Meeus/Jones/Butcher).  Pure integer
//! arithmetic; no calendar library is involved, so the result can be checked
//! directly against published Easter tables.

use tariff_core::errors::Result;

use crate::date::Date;
use crate::month::Month;

/// Month (3 or 4) and day of Easter Sunday in the Gregorian `year`.
///
/// Defined for every integer year; Euclidean division keeps the arithmetic
/// valid for negative (astronomical) years as well.
///
/// ```
/// use tariff_time::easter_month_day;
/// assert_eq!(easter_month_day(2024), (3, 31));
/// assert_eq!(easter_month_day(2025), (4, 20));
/// ```
pub fn easter_month_day(year: i32) -> (u8, u8) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Day of the year (1-based) of Easter Sunday in `year`.
pub fn easter_day_of_year(year: u16) -> u16 {
    let (month, day) = easter_month_day(year as i32);
    let month = if month == 3 { Month::March } else { Month::April };
    month.days_before(year) + day as u16
}

/// Easter Sunday of `year` as a [`Date`].
///
/// Fails only when `year` lies outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    Date::from_year_and_day(year, easter_day_of_year(year))
}
