//! Share-token schema for the monthly payment calculator.
//!
//! Wire layout, 14 bytes:
//!
//! | field | kind | scale |
//! |-------|------|-------|
//! | home_price | U24 | — |
//! | down_payment | U24 | — |
//! | loan_term | U8 | — |
//! | interest_rate | U8 | tenths of a percent |
//! | annual_taxes | U16 | — |
//! | annual_insurance | U16 | — |
//! | monthly_hoa | U16 | — |

use rust_decimal::Decimal;

use mortgage_core::models::LoanPaymentParameters;

use crate::error::CodecError;
use crate::fields::{dollars_to_field, int_to_field, rate_from_field, rate_to_field};
use crate::layout::{FieldKind, FieldSpec, pack, unpack};
use crate::token::{decode_token, encode_token};

const LAYOUT: [FieldSpec; 7] = [
    FieldSpec {
        name: "home_price",
        kind: FieldKind::U24,
    },
    FieldSpec {
        name: "down_payment",
        kind: FieldKind::U24,
    },
    FieldSpec {
        name: "loan_term",
        kind: FieldKind::U8,
    },
    FieldSpec {
        name: "interest_rate",
        kind: FieldKind::U8,
    },
    FieldSpec {
        name: "annual_taxes",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "annual_insurance",
        kind: FieldKind::U16,
    },
    FieldSpec {
        name: "monthly_hoa",
        kind: FieldKind::U16,
    },
];

/// Encodes loan payment parameters as a shareable URL token.
///
/// # Errors
///
/// Returns [`CodecError::FieldOutOfRange`] when a value is negative or does
/// not fit its wire field.
pub fn encode_loan_payment(params: &LoanPaymentParameters) -> Result<String, CodecError> {
    let values = [
        dollars_to_field(&LAYOUT[0], params.home_price)?,
        dollars_to_field(&LAYOUT[1], params.down_payment)?,
        int_to_field(&LAYOUT[2], params.loan_term_years)?,
        rate_to_field(&LAYOUT[3], params.interest_rate)?,
        dollars_to_field(&LAYOUT[4], params.annual_tax)?,
        dollars_to_field(&LAYOUT[5], params.annual_insurance)?,
        dollars_to_field(&LAYOUT[6], params.monthly_hoa)?,
    ];
    let bytes = pack(&LAYOUT, &values)?;
    Ok(encode_token(&bytes))
}

/// Decodes a share token back into loan payment parameters.
///
/// # Errors
///
/// Returns [`CodecError`] for tokens with foreign characters or the wrong
/// decoded length; no partial result is ever produced.
pub fn decode_loan_payment(token: &str) -> Result<LoanPaymentParameters, CodecError> {
    let values = decode_token(token)
        .and_then(|bytes| unpack(&LAYOUT, &bytes))
        .map_err(|error| {
            tracing::warn!(%error, "rejected payment share token");
            error
        })?;

    Ok(LoanPaymentParameters {
        home_price: Decimal::from(values[0]),
        down_payment: Decimal::from(values[1]),
        loan_term_years: values[2],
        interest_rate: rate_from_field(values[3]),
        annual_tax: Decimal::from(values[4]),
        annual_insurance: Decimal::from(values[5]),
        monthly_hoa: Decimal::from(values[6]),
    })
}
