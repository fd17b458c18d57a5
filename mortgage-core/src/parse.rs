//! Parsing of raw form-field strings into decimal amounts.
//!
//! The form layer hands over whatever the user typed; these helpers tolerate
//! the usual adornments (`$`, `%`, comma thousands separators, surrounding
//! whitespace) and treat an empty field as zero.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a form field cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a money field like `"$1,234.56"` into a [`Decimal`].
///
/// Empty or whitespace-only input is treated as 0. Invalid input is logged
/// and returned as an error.
pub fn parse_money(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = s.trim();
    parse_amount(s, trimmed.strip_prefix('$').unwrap_or(trimmed))
}

/// Parses a rate field like `"6.5%"` into a [`Decimal`] percentage.
///
/// Empty or whitespace-only input is treated as 0. Invalid input is logged
/// and returned as an error.
pub fn parse_percent(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = s.trim();
    parse_amount(s, trimmed.strip_suffix('%').unwrap_or(trimmed))
}

fn parse_amount(
    original: &str,
    bare: &str,
) -> Result<Decimal, ParseAmountError> {
    let normalized = bare.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %original, "invalid amount: {}", e);
        ParseAmountError {
            input: original.to_string(),
            source: e,
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_money_accepts_plain_numbers() {
        assert_eq!(parse_money("2000").unwrap(), dec!(2000));
        assert_eq!(parse_money("1234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_money_strips_dollar_sign_and_commas() {
        assert_eq!(parse_money("$1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_money("$ 80,000").unwrap(), dec!(80000));
    }

    #[test]
    fn parse_money_trims_whitespace() {
        assert_eq!(parse_money("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_money_empty_is_zero() {
        assert_eq!(parse_money("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_money("   ").unwrap(), Decimal::ZERO);
        assert_eq!(parse_money("$").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_money_rejects_garbage() {
        assert!(parse_money("abc").is_err());
        assert!(parse_money("$12x").is_err());
    }

    #[test]
    fn parse_percent_strips_suffix() {
        assert_eq!(parse_percent("6.5%").unwrap(), dec!(6.5));
        assert_eq!(parse_percent("6.5").unwrap(), dec!(6.5));
        assert_eq!(parse_percent(" 4 % ").unwrap(), dec!(4));
    }

    #[test]
    fn parse_percent_empty_is_zero() {
        assert_eq!(parse_percent("").unwrap(), Decimal::ZERO);
    }
}
