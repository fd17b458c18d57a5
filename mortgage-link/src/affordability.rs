//! Share-token schema for the affordability estimator.
//!
//! Wire layout, 15 bytes:
//!
//! | field | kind | scale |
//! |-------|------|-------|
//! | monthly_payment | U16 | — |
//! | down_payment | U24 | — |
//! | interest_rate_min | U8 | tenths of a percent |
//! | interest_rate_max | U8 | tenths of a percent |
//! | property_tax_min | U16 | — |
//! | property_tax_max | U16 | — |
//! | insurance | U16 | — |
//! | hoa | U16 | — |
//!
//! The loan term is not on the wire; decoding restores the default term.

use rust_decimal::Decimal;

use mortgage_core::models::{AffordabilityQuery, DEFAULT_LOAN_TERM_YEARS, RangeValues};

use crate::error::CodecError;
use crate::fields::{dollars_to_field, rate_from_field, rate_to_field};
use crate::layout::{FieldKind, FieldSpec, pack, unpack};
use crate::token::{decode_token, encode_token};

const LAYOUT: [FieldSpec; 8] = [
    FieldSpec {
        name: "monthly_payment",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "down_payment",
        kind: FieldKind::U24,
    },
    FieldSpec {
        name: "interest_rate_min",
        kind: FieldKind::U8,
    },
    FieldSpec {
        name: "interest_rate_max",
        kind: FieldKind::U8,
    },
    FieldSpec {
        name: "property_tax_min",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "property_tax_max",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "insurance",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "hoa",
        kind: FieldKind::U16,
    },
];

/// Encodes an affordability query as a shareable URL token.
///
/// # Errors
///
/// Returns [`CodecError::FieldOutOfRange`] when a value is negative or does
/// not fit its wire field.
pub fn encode_affordability_query(query: &AffordabilityQuery) -> Result<String, CodecError> {
    let values = [
        dollars_to_field(&LAYOUT[0], query.monthly_payment)?,
        dollars_to_field(&LAYOUT[1], query.down_payment)?,
        rate_to_field(&LAYOUT[2], query.interest_rate_range.min)?,
        rate_to_field(&LAYOUT[3], query.interest_rate_range.max)?,
        dollars_to_field(&LAYOUT[4], query.property_tax_range.min)?,
        dollars_to_field(&LAYOUT[5], query.property_tax_range.max)?,
        dollars_to_field(&LAYOUT[6], query.insurance)?,
        dollars_to_field(&LAYOUT[7], query.hoa)?,
    ];
    let bytes = pack(&LAYOUT, &values)?;
    Ok(encode_token(&bytes))
}

/// Decodes a share token back into an affordability query.
///
/// # Errors
///
/// Returns [`CodecError`] for tokens with foreign characters or the wrong
/// decoded length; no partial result is ever produced.
pub fn decode_affordability_query(token: &str) -> Result<AffordabilityQuery, CodecError> {
    let values = decode_token(token)
        .and_then(|bytes| unpack(&LAYOUT, &bytes))
        .map_err(|error| {
            tracing::warn!(%error, "rejected affordability share token");
            error
        })?;

    Ok(AffordabilityQuery {
        monthly_payment: Decimal::from(values[0]),
        down_payment: Decimal::from(values[1]),
        interest_rate_range: RangeValues {
            min: rate_from_field(values[2]),
            max: rate_from_field(values[3]),
        },
        property_tax_range: RangeValues {
            min: Decimal::from(values[4]),
            max: Decimal::from(values[5]),
        },
        insurance: Decimal::from(values[6]),
        hoa: Decimal::from(values[7]),
        loan_term_years: DEFAULT_LOAN_TERM_YEARS,
    })
}
