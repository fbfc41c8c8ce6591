//! # tariff
//!
//! Deterministic pricing of service-marketplace requests: surcharges for
//! evenings, nights, weekends, and public holidays, followed by urgency,
//! travel, platform, tax, and payment-processor fees, all in integer minor
//! currency units.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `tariff-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tariff::engine::{compute_price, PricingRequest};
//! use tariff::time::LocalTimestamp;
//!
//! let at: LocalTimestamp = "2024-03-12T10:00".parse().unwrap();
//! let request = PricingRequest::hourly(Decimal::from(40), Decimal::ONE, at);
//! let breakdown = compute_price(&request);
//! assert_eq!(breakdown.final_total(), 6166);
//! assert_eq!(breakdown.formatted.final_total, "61.66");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Type aliases, rounding conventions, and error definitions.
pub use tariff_core as core;

/// Dates, local timestamps, Easter, and holiday calendars.
pub use tariff_time as time;

/// Surcharge multiplier, fee stack, configuration, and the pricing engine.
pub use tariff_engine as engine;

/// Logging setup for binaries embedding the engine.
pub mod logging;
