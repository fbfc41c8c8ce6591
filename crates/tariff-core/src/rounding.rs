//! Rounding conventions for decimal amounts.
//!
//! Every fee step rounds its result to whole minor units before the next step
//! reads it, so the convention is part of the pricing contract.  The default
//! is [`Rounding::Closest`] (ties away from zero); any other convention must be
//! selected explicitly.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::MinorUnits;

/// Rounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round to nearest, ties away from zero (`2.5 → 3`, `-2.5 → -3`).
    #[default]
    Closest,
    /// Round to nearest, ties to even (banker's rounding, `2.5 → 2`).
    HalfEven,
    /// Round towards positive infinity.
    Up,
    /// Round towards negative infinity.
    Down,
    /// Round towards zero (truncation).
    Truncate,
}

impl Rounding {
    /// The `rust_decimal` strategy implementing this convention.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::Closest => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::Up => RoundingStrategy::ToPositiveInfinity,
            Rounding::Down => RoundingStrategy::ToNegativeInfinity,
            Rounding::Truncate => RoundingStrategy::ToZero,
        }
    }

    /// Round `value` to `places` decimal places.
    pub fn round(self, value: Decimal, places: u32) -> Decimal {
        value.round_dp_with_strategy(places, self.strategy())
    }
}

/// `a × b`, clamped to [`Decimal::MIN`, `Decimal::MAX`] instead of
/// panicking when the product leaves the decimal range.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(if a.is_sign_negative() != b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Round `value` to a whole number of minor units.
///
/// Values beyond the `i64` range saturate; such inputs already violate the
/// caller's preconditions.
pub fn round_to_minor(value: Decimal, convention: Rounding) -> MinorUnits {
    let rounded = convention.round(value, 0);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        MinorUnits::MIN
    } else {
        MinorUnits::MAX
    })
}
