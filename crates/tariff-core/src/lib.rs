//! # tariff-core
//!
//! Core types, rounding conventions, and error definitions for tariff.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – the money type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, the pinned rounding conventions used at every
//! fee step, and the minor-unit formatting helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Minor-unit and rate formatting helpers.
pub mod formatting;

/// Rounding conventions applied to decimal amounts.
pub mod rounding;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Amount of money in the smallest currency unit (e.g. euro cents).
///
/// All fee-stack arithmetic is carried out on this integer type.
pub type MinorUnits = i64;

/// A fraction applied to an amount (e.g. `0.21` = 21 %).
pub type Rate = rust_decimal::Decimal;

/// A multiplicative surcharge factor (e.g. `1.3`).
pub type Factor = rust_decimal::Decimal;

/// Number of decimal places between major and minor currency units
/// (2 for EUR/USD, 0 for JPY).
pub type CurrencyExponent = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use formatting::{format_minor_units, format_rate, to_minor_units};
pub use rounding::{round_to_minor, saturating_mul, Rounding};
