//! Conversions between decimal form values and wire integers.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::CodecError;
use crate::layout::FieldSpec;

/// Converts a dollar amount to its wire integer, truncating cents.
pub(crate) fn dollars_to_field(
    spec: &FieldSpec,
    amount: Decimal,
) -> Result<u32, CodecError> {
    range_check(spec, amount.trunc().to_i64().unwrap_or(i64::MAX))
}

/// Converts a percent rate to tenths of a percent, half-up.
///
/// One byte of tenths caps the representable rate at 25.5%.
pub(crate) fn rate_to_field(
    spec: &FieldSpec,
    rate: Decimal,
) -> Result<u32, CodecError> {
    let tenths = (rate * Decimal::TEN)
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX);
    range_check(spec, tenths)
}

/// Reads a tenths-of-a-percent wire value back into a rate.
pub(crate) fn rate_from_field(raw: u32) -> Decimal {
    Decimal::new(i64::from(raw), 1)
}

/// Converts an integer form value (e.g. a term in years) to its wire integer.
pub(crate) fn int_to_field(
    spec: &FieldSpec,
    value: u32,
) -> Result<u32, CodecError> {
    range_check(spec, i64::from(value))
}

fn range_check(
    spec: &FieldSpec,
    value: i64,
) -> Result<u32, CodecError> {
    if value < 0 || value > i64::from(spec.kind.max()) {
        return Err(CodecError::FieldOutOfRange {
            field: spec.name,
            value,
            max: spec.kind.max(),
        });
    }
    Ok(value as u32)
}
