//! Formatting helpers for minor-unit amounts and rates.
//!
//! Amounts are displayed with exactly `exponent` decimal places (`6166` with
//! exponent 2 → `"61.66"`), never via floating point.

use rust_decimal::Decimal;

use crate::rounding::{round_to_minor, saturating_mul, Rounding};
use crate::{CurrencyExponent, MinorUnits, Rate};

/// Format an amount of minor units as a fixed-point decimal string.
///
/// ```
/// use tariff_core::format_minor_units;
/// assert_eq!(format_minor_units(6166, 2), "61.66");
/// assert_eq!(format_minor_units(4000, 2), "40.00");
/// assert_eq!(format_minor_units(5, 2), "0.05");
/// ```
pub fn format_minor_units(amount: MinorUnits, exponent: CurrencyExponent) -> String {
    Decimal::new(amount, exponent).to_string()
}

/// Convert a major-unit amount (e.g. `40.50` euros) to minor units.
///
/// Amounts beyond the `i64` range saturate.
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_core::{to_minor_units, Rounding};
/// assert_eq!(to_minor_units(Decimal::new(4050, 2), 2, Rounding::Closest), 4050);
/// ```
pub fn to_minor_units(
    major: Decimal,
    exponent: CurrencyExponent,
    rounding: Rounding,
) -> MinorUnits {
    let scale = Decimal::from(10_i64.checked_pow(exponent).unwrap_or(i64::MAX));
    round_to_minor(saturating_mul(major, scale), rounding)
}

/// Format a rate as a percentage string (e.g. `0.215` → `"21.5 %"`).
pub fn format_rate(r: Rate) -> String {
    match r.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{} %", percent.normalize()),
        None => format!("{r}"),
    }
}
