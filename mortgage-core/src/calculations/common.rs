//! Common utility functions for mortgage calculations.
//!
//! This module provides shared rounding and `Decimal`/`f64` conversion
//! helpers used across the calculation modules.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the nearest whole dollar, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_to_dollar(dec!(1234.50)), dec!(1235));
/// assert_eq!(round_to_dollar(dec!(-10.5)), dec!(-11));
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a decimal amount to `f64` for the annuity math.
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Converts an `f64` back into a decimal amount.
///
/// Returns `None` for NaN or infinite inputs; callers turn that into their
/// own error rather than letting a garbage amount through.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}
