//! Pricing request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tariff_core::errors::{Error, Result};
use tariff_core::saturating_mul;
use tariff_time::LocalTimestamp;

/// How the base amount of a service is quoted, in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaseAmount {
    /// Hourly rate times a (possibly fractional) number of hours.
    Hourly {
        /// Rate per hour.
        rate_per_hour: Decimal,
        /// Billed hours.
        hours: Decimal,
    },
    /// Fixed price for the whole service.
    Flat {
        /// The price.
        amount: Decimal,
    },
}

impl BaseAmount {
    /// The amount in major currency units, before any rounding.
    ///
    /// A product beyond the decimal range saturates.
    pub fn major_units(&self) -> Decimal {
        match *self {
            BaseAmount::Hourly {
                rate_per_hour,
                hours,
            } => saturating_mul(rate_per_hour, hours),
            BaseAmount::Flat { amount } => amount,
        }
    }
}

/// Everything the engine needs to price one service request.
///
/// Callers must reject negative amounts before pricing, see
/// [`PricingRequest::validate`]; the engine itself does not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRequest {
    /// Base amount.
    pub base: BaseAmount,
    /// Immediate, non-scheduled request.
    #[serde(default)]
    pub is_urgent: bool,
    /// Travel distance to the service location, 0 if unknown.
    #[serde(default)]
    pub distance_km: Decimal,
    /// Local date and time the service is requested for.
    pub requested_at: LocalTimestamp,
}

impl PricingRequest {
    /// A request billed at `rate_per_hour` for `hours`.
    pub fn hourly(rate_per_hour: Decimal, hours: Decimal, requested_at: LocalTimestamp) -> Self {
        Self {
            base: BaseAmount::Hourly {
                rate_per_hour,
                hours,
            },
            is_urgent: false,
            distance_km: Decimal::ZERO,
            requested_at,
        }
    }

    /// A request billed at a flat `amount`.
    pub fn flat(amount: Decimal, requested_at: LocalTimestamp) -> Self {
        Self {
            base: BaseAmount::Flat { amount },
            is_urgent: false,
            distance_km: Decimal::ZERO,
            requested_at,
        }
    }

    /// Set the urgency flag.
    pub fn with_urgent(mut self, is_urgent: bool) -> Self {
        self.is_urgent = is_urgent;
        self
    }

    /// Set the travel distance.
    pub fn with_distance_km(mut self, distance_km: Decimal) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Reject negative rates, hours, amounts, and distances.
    pub fn validate(&self) -> Result<()> {
        let mut fields = vec![("distance_km", self.distance_km)];
        match self.base {
            BaseAmount::Hourly {
                rate_per_hour,
                hours,
            } => {
                fields.push(("rate_per_hour", rate_per_hour));
                fields.push(("hours", hours));
            }
            BaseAmount::Flat { amount } => fields.push(("amount", amount)),
        }
        match fields.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
            Some((name, value)) => Err(Error::InvalidInput(format!(
                "{name} must be non-negative, got {value}"
            ))),
            None => Ok(()),
        }
    }
}
