//! Display formatting for amounts, price ranges, and rates.
//!
//! Currency strings carry no cents; a negative amount means the scenario is
//! unaffordable and renders as the literal [`OUT_OF_BUDGET`] marker instead
//! of a dollar figure.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculations::common::round_to_dollar;

/// Marker string rendered in place of a negative amount.
pub const OUT_OF_BUDGET: &str = "Out of Budget";

/// Formats an amount as whole dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1000)), "$1,000");
/// assert_eq!(format_currency(dec!(0)), "$0");
/// assert_eq!(format_currency(dec!(-1000)), "Out of Budget");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        return OUT_OF_BUDGET.to_string();
    }
    let dollars = round_to_dollar(amount).to_u128().unwrap_or(0);
    format!("${}", group_thousands(dollars))
}

/// Formats a price band as `"$min - $max"`.
pub fn format_price_range(
    min: Decimal,
    max: Decimal,
) -> String {
    format!("{} - {}", format_currency(min), format_currency(max))
}

/// Formats a rate as a percentage, trimming trailing zeros (`"6.5%"`).
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1000)), "$1,000");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000");
        assert_eq!(format_currency(dec!(123)), "$123");
    }

    #[test]
    fn format_currency_zero_is_a_dollar_figure() {
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn format_currency_negative_is_out_of_budget() {
        assert_eq!(format_currency(dec!(-1000)), "Out of Budget");
        assert_eq!(format_currency(dec!(-1)), "Out of Budget");
    }

    #[test]
    fn format_currency_drops_cents() {
        assert_eq!(format_currency(dec!(1738.37)), "$1,738");
        assert_eq!(format_currency(dec!(1738.50)), "$1,739");
    }

    #[test]
    fn format_price_range_joins_two_amounts() {
        assert_eq!(
            format_price_range(dec!(100000), dec!(200000)),
            "$100,000 - $200,000"
        );
        assert_eq!(format_price_range(dec!(0), dec!(1000)), "$0 - $1,000");
        assert_eq!(
            format_price_range(dec!(1000000), dec!(1000000)),
            "$1,000,000 - $1,000,000"
        );
    }

    #[test]
    fn format_price_range_marks_unaffordable_ends() {
        assert_eq!(
            format_price_range(dec!(-5000), dec!(120000)),
            "Out of Budget - $120,000"
        );
    }

    #[test]
    fn format_percent_trims_trailing_zeros() {
        assert_eq!(format_percent(dec!(6.5)), "6.5%");
        assert_eq!(format_percent(dec!(6.50)), "6.5%");
        assert_eq!(format_percent(dec!(5)), "5%");
    }
}
