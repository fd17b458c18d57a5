//! Sweep generation for the affordability estimator's two dimensions.
//!
//! All arithmetic here is exact `Decimal` fixed-point, so the two-decimal
//! re-rounding that keeps binary floats from drifting (0.1 + 0.2 != 0.3)
//! costs nothing and the generated sequences are reproducible.
//!
//! The two adaptive variants pick their own step sizes:
//!
//! | dimension | policy |
//! |-----------|--------|
//! | interest rate | stride targeting ~4 samples, floored at 0.5 points |
//! | property tax | tiered whole-dollar step by span (1k/2k/5k/10k) |
//!
//! Both force-include the exact endpoints so the headline min/max figures
//! always come from the requested extremes.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors raised when a sweep cannot be generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// The step is zero or negative (directly or after rounding to cents).
    #[error("step must be positive, got {0}")]
    StepNotPositive(Decimal),

    /// The interval is inverted.
    #[error("range minimum {min} exceeds maximum {max}")]
    EmptyRange { min: Decimal, max: Decimal },
}

/// Generates `min, min + step, ...` up to and including `max`.
///
/// `max` and `step` are rounded to two decimal places up front, and every
/// advance is re-rounded the same way. The first element is always `min`;
/// the last is `<= max` and `> max - step`.
///
/// # Errors
///
/// Returns [`RangeError`] when `min > max` or the step is not positive
/// after rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::ranges::generate_range;
///
/// let values = generate_range(dec!(0.1), dec!(0.3), dec!(0.1)).unwrap();
/// assert_eq!(values, vec![dec!(0.1), dec!(0.2), dec!(0.3)]);
/// ```
pub fn generate_range(
    min: Decimal,
    max: Decimal,
    step: Decimal,
) -> Result<Vec<Decimal>, RangeError> {
    if min > max {
        return Err(RangeError::EmptyRange { min, max });
    }
    let max = round_half_up(max);
    let step = round_half_up(step);
    if step <= Decimal::ZERO {
        return Err(RangeError::StepNotPositive(step));
    }

    let mut values = Vec::new();
    let mut value = min;
    while value <= max {
        values.push(value);
        value = round_half_up(value + step);
    }
    Ok(values)
}

/// Samples an annual-interest-rate interval (percent).
///
/// Uses an adaptive stride aiming for about four samples so the expandable
/// detail view stays short no matter how wide the request is, then
/// force-includes the exact endpoints.
///
/// # Errors
///
/// Returns [`RangeError::EmptyRange`] when `min > max`.
pub fn interest_rate_samples(
    min: Decimal,
    max: Decimal,
) -> Result<Vec<Decimal>, RangeError> {
    if min > max {
        return Err(RangeError::EmptyRange { min, max });
    }
    let step = interest_rate_step(min, max);

    let mut rates = Vec::new();
    let mut rate = min;
    while rate <= max {
        rates.push(rate.round_dp_with_strategy(
            3,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ));
        rate += step;
    }

    force_endpoints(&mut rates, min, max);
    Ok(rates)
}

/// Samples an annual-property-tax interval (dollars).
///
/// Property-tax spans are much wider in absolute terms than rate spans, so
/// the step is tiered by magnitude to keep the sampled values round.
///
/// # Errors
///
/// Returns [`RangeError::EmptyRange`] when `min > max`.
pub fn property_tax_samples(
    min: Decimal,
    max: Decimal,
) -> Result<Vec<Decimal>, RangeError> {
    if min > max {
        return Err(RangeError::EmptyRange { min, max });
    }
    let step = property_tax_step(max - min);

    let mut taxes = generate_range(min, max, step)?;
    force_endpoints(&mut taxes, min, max);
    Ok(taxes)
}

/// Stride for the rate sweep: `max(0.5, round(raw * 2) / 2)` where `raw`
/// spreads the span over `clamp(floor(span / 0.5), 2, 4)` samples.
fn interest_rate_step(
    min: Decimal,
    max: Decimal,
) -> Decimal {
    let half = Decimal::new(5, 1);
    let span = max - min;

    let samples = (span / half)
        .floor()
        .clamp(Decimal::TWO, Decimal::from(4));
    let raw = span / (samples - Decimal::ONE);

    // Snap to the nearest half point, never below 0.5.
    let snapped = (raw * Decimal::TWO)
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        / Decimal::TWO;
    snapped.max(half)
}

fn property_tax_step(span: Decimal) -> Decimal {
    if span >= Decimal::from(30_000) {
        Decimal::from(10_000)
    } else if span >= Decimal::from(15_000) {
        Decimal::from(5_000)
    } else if span >= Decimal::from(6_000) {
        Decimal::from(2_000)
    } else {
        Decimal::from(1_000)
    }
}

/// Guarantees the exact interval endpoints are present, sorted, unique.
fn force_endpoints(
    values: &mut Vec<Decimal>,
    min: Decimal,
    max: Decimal,
) {
    if !values.contains(&min) {
        values.insert(0, min);
    }
    if !values.contains(&max) {
        values.push(max);
    }
    values.sort();
    values.dedup();
}
