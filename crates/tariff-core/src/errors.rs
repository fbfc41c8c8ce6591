//! Error types for tariff.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace.  Pricing itself never fails; errors come from input
//! validation, configuration loading, date construction, and reconciliation
//! against an authoritative breakdown.  The `ensure!` and `fail!` macros are
//! the usual shorthands for early returns.

use thiserror::Error;

/// The top-level error type used throughout tariff.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A pricing input is negative or otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Pricing configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// A textual value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A locally computed amount disagrees with the authoritative one.
    #[error("{field} mismatch: local {local}, authoritative {authoritative}")]
    Mismatch {
        /// Name of the first field that differs.
        field: &'static str,
        /// Value computed locally.
        local: i64,
        /// Value reported by the authoritative counterpart.
        authoritative: i64,
    },
}

/// Shorthand `Result` type used throughout tariff.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tariff_core::{ensure, errors::Error};
/// fn non_negative(x: i64) -> tariff_core::errors::Result<i64> {
///     ensure!(x >= 0, "x must be non-negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(non_negative(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tariff_core::{fail, errors::Error};
/// fn always_err() -> tariff_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: i64) -> Result<i64> {
        ensure!(x < 10, "x too large: {x}");
        Ok(x)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(12),
            Err(Error::Precondition("x too large: 12".into()))
        );
    }

    #[test]
    fn mismatch_message_names_field() {
        let e = Error::Mismatch {
            field: "tax",
            local: 1050,
            authoritative: 1049,
        };
        assert_eq!(e.to_string(), "tax mismatch: local 1050, authoritative 1049");
    }
}
