//! # tariff-engine
//!
//! Turns a service rate into a final chargeable amount.
//!
//! ## Pipeline
//!
//! - [`MultiplierResolver`]: evening / night / Saturday / Sunday-or-holiday
//!   surcharge factors for a [`LocalTimestamp`](tariff_time::LocalTimestamp)
//! - [`FeeStack`]: urgency, travel, platform, tax, and processor fees in
//!   integer minor units, rounding after every step
//! - [`PricingEngine`]: entry point combining base amount, multiplier, fee stack, and
//!   formatted [`PricingBreakdown`]
//!
//! All rates come from an injected [`PricingConfig`].  Results are advisory;
//! the authoritative counterpart repeats the same computation before any
//! charge is captured, see [`PricingBreakdown::reconcile`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod breakdown;
pub mod config;
pub mod engine;
pub mod fee_stack;
pub mod multiplier;
pub mod request;

pub use breakdown::{FormattedAmounts, LineItem, PricingBreakdown};
pub use config::{
    CalendarKind, ExtraHoliday, FeeSchedule, HolidayConfig, PricingConfig, SurchargeRules,
    TimeWindow,
};
pub use engine::{compute_price, PricingEngine};
pub use fee_stack::{FeeAmounts, FeeStack};
pub use multiplier::{AppliedMultiplier, AppliedSurcharge, MultiplierResolver, SurchargeKind};
pub use request::{BaseAmount, PricingRequest};
