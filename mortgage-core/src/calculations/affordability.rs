//! Affordable house-price estimation.
//!
//! Given a target total monthly payment, the estimator sweeps the requested
//! interest-rate and property-tax intervals and solves each combination for
//! the house price whose loan the remaining budget can amortize:
//!
//! | step | computation |
//! |------|-------------|
//! | 1 | `monthly_tax = tax / 12`, `monthly_insurance = insurance / 12` |
//! | 2 | `budget = monthly_payment - monthly_tax - monthly_insurance - hoa` |
//! | 3 | `loan = -present_value(rate / 100 / 12, years * 12, budget)` |
//! | 4 | `house_price = round(loan + down_payment)` to whole dollars |
//!
//! A budget below the fixed costs is not rejected: it produces a negative
//! implied loan and a negative house price, which the presentation layer
//! renders as "Out of Budget". The result is keyed by sampled property tax,
//! ascending, with each band holding the per-rate detail plus its extrema.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::calculate_affordability;
//! use mortgage_core::models::{AffordabilityQuery, RangeValues};
//!
//! let query = AffordabilityQuery {
//!     monthly_payment: dec!(2000),
//!     down_payment: dec!(40000),
//!     interest_rate_range: RangeValues { min: dec!(5), max: dec!(5) },
//!     property_tax_range: RangeValues { min: dec!(2000), max: dec!(2000) },
//!     insurance: dec!(1200),
//!     hoa: dec!(0),
//!     loan_term_years: 30,
//! };
//!
//! let result = calculate_affordability(&query).unwrap();
//! let band = &result[&dec!(2000)];
//! assert_eq!(band.min, band.max);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::annuity::present_value;
use crate::calculations::common::{decimal_from_f64, decimal_to_f64, round_to_dollar};
use crate::calculations::ranges::{RangeError, interest_rate_samples, property_tax_samples};
use crate::models::{
    AffordabilityByPropertyTax, AffordabilityQuery, HousePricePoint, PriceRangeData,
};

/// Errors that can occur while estimating affordability.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AffordabilityError {
    /// The loan term is zero years.
    #[error("loan term must be at least one year")]
    InvalidLoanTerm,

    /// One of the sweep intervals is unusable.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The annuity math produced a non-finite house price.
    #[error("house price is not finite at rate {interest_rate}")]
    NonFiniteHousePrice { interest_rate: Decimal },
}

/// Computes affordable house-price bands for the query's swept intervals.
///
/// # Errors
///
/// Returns [`AffordabilityError`] if the loan term is zero, either sweep
/// interval is inverted, or a computed price is not a finite number.
pub fn calculate_affordability(
    query: &AffordabilityQuery,
) -> Result<AffordabilityByPropertyTax, AffordabilityError> {
    if query.loan_term_years == 0 {
        return Err(AffordabilityError::InvalidLoanTerm);
    }

    let rates = interest_rate_samples(
        query.interest_rate_range.min,
        query.interest_rate_range.max,
    )?;
    let taxes = property_tax_samples(
        query.property_tax_range.min,
        query.property_tax_range.max,
    )?;
    debug!(?rates, ?taxes, "sampled sweep dimensions");

    let twelve = Decimal::from(12);
    let monthly_insurance = query.insurance / twelve;
    let payments = f64::from(query.loan_term_years * 12);
    let down_payment = decimal_to_f64(query.down_payment);

    let mut results = AffordabilityByPropertyTax::new();
    for &tax in &taxes {
        let monthly_tax = tax / twelve;
        // May go negative; a negative budget implies a negative loan, not an error.
        let budget_for_pi =
            query.monthly_payment - monthly_tax - monthly_insurance - query.hoa;

        let mut house_prices = Vec::with_capacity(rates.len());
        for &rate in &rates {
            let monthly_rate = decimal_to_f64(rate) / 100.0 / 12.0;
            let loan_amount =
                -present_value(monthly_rate, payments, decimal_to_f64(budget_for_pi));

            let house_price = decimal_from_f64(loan_amount + down_payment)
                .map(round_to_dollar)
                .ok_or(AffordabilityError::NonFiniteHousePrice {
                    interest_rate: rate,
                })?;
            house_prices.push(HousePricePoint {
                interest_rate: rate,
                house_price,
            });
        }

        let min = house_prices
            .iter()
            .map(|point| point.house_price)
            .min()
            .unwrap_or_default();
        let max = house_prices
            .iter()
            .map(|point| point.house_price)
            .max()
            .unwrap_or_default();
        results.insert(
            tax,
            PriceRangeData {
                min,
                max,
                house_prices,
            },
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::RangeValues;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn test_query() -> AffordabilityQuery {
        AffordabilityQuery {
            monthly_payment: dec!(2000),
            down_payment: dec!(40000),
            interest_rate_range: RangeValues {
                min: dec!(5),
                max: dec!(5),
            },
            property_tax_range: RangeValues {
                min: dec!(2000),
                max: dec!(2000),
            },
            insurance: dec!(1200),
            hoa: dec!(0),
            loan_term_years: 30,
        }
    }

    #[test]
    fn degenerate_query_yields_single_band_with_equal_extrema() {
        init_tracing();

        let result = calculate_affordability(&test_query()).unwrap();

        assert_eq!(result.len(), 1);
        let band = &result[&dec!(2000)];
        assert_eq!(band.min, band.max);
        assert_eq!(band.house_prices.len(), 1);
        assert_eq!(band.house_prices[0].interest_rate, dec!(5));
    }

    #[test]
    fn single_rate_band_matches_the_annuity_solution() {
        let result = calculate_affordability(&test_query()).unwrap();

        // budget = 2000 - 2000/12 - 1200/12 - 0
        let budget =
            decimal_to_f64(dec!(2000) - dec!(2000) / dec!(12) - dec!(1200) / dec!(12) - dec!(0));
        let loan = -present_value(5.0 / 100.0 / 12.0, 360.0, budget);
        let expected = (loan + 40_000.0).round();

        let band = &result[&dec!(2000)];
        assert_eq!(band.min, decimal_from_f64(expected).unwrap());
    }

    #[test]
    fn result_keys_ascend_with_property_tax() {
        let mut query = test_query();
        query.property_tax_range = RangeValues {
            min: dec!(2000),
            max: dec!(5000),
        };

        let result = calculate_affordability(&query).unwrap();

        let keys: Vec<_> = result.keys().copied().collect();
        assert_eq!(keys, vec![dec!(2000), dec!(3000), dec!(4000), dec!(5000)]);
    }

    #[test]
    fn higher_property_tax_never_raises_the_band() {
        let mut query = test_query();
        query.property_tax_range = RangeValues {
            min: dec!(2000),
            max: dec!(10000),
        };

        let result = calculate_affordability(&query).unwrap();

        let bands: Vec<_> = result.values().collect();
        for pair in bands.windows(2) {
            assert!(pair[1].min <= pair[0].min);
            assert!(pair[1].max <= pair[0].max);
        }
    }

    #[test]
    fn house_prices_ascend_with_falling_interest_rate() {
        let mut query = test_query();
        query.interest_rate_range = RangeValues {
            min: dec!(4),
            max: dec!(6),
        };

        let result = calculate_affordability(&query).unwrap();

        // Cheaper money affords a bigger loan, so prices fall as the rate rises.
        let band = &result[&dec!(2000)];
        assert_eq!(band.house_prices.len(), 5);
        for pair in band.house_prices.windows(2) {
            assert!(pair[0].interest_rate < pair[1].interest_rate);
            assert!(pair[0].house_price >= pair[1].house_price);
        }
        assert_eq!(band.min, band.house_prices.last().unwrap().house_price);
        assert_eq!(band.max, band.house_prices[0].house_price);
    }

    #[test]
    fn zero_interest_rate_is_handled() {
        let mut query = test_query();
        query.interest_rate_range = RangeValues {
            min: dec!(0),
            max: dec!(0),
        };

        let result = calculate_affordability(&query).unwrap();

        // Zero rate degenerates to budget * 360 + down payment.
        let budget =
            decimal_to_f64(dec!(2000) - dec!(2000) / dec!(12) - dec!(1200) / dec!(12) - dec!(0));
        let expected = (budget * 360.0 + 40_000.0).round();
        let band = &result[&dec!(2000)];
        assert_eq!(band.min, decimal_from_f64(expected).unwrap());
    }

    #[test]
    fn insufficient_budget_passes_through_as_negative_price() {
        let mut query = test_query();
        query.monthly_payment = dec!(100);
        query.down_payment = dec!(0);

        let result = calculate_affordability(&query).unwrap();

        let band = &result[&dec!(2000)];
        assert!(band.max < Decimal::ZERO);
    }

    #[test]
    fn zero_loan_term_is_rejected() {
        let mut query = test_query();
        query.loan_term_years = 0;

        let result = calculate_affordability(&query);

        assert_eq!(result, Err(AffordabilityError::InvalidLoanTerm));
    }

    #[test]
    fn inverted_rate_interval_is_rejected() {
        let mut query = test_query();
        query.interest_rate_range = RangeValues {
            min: dec!(6),
            max: dec!(4),
        };

        let result = calculate_affordability(&query);

        assert_eq!(
            result,
            Err(AffordabilityError::Range(RangeError::EmptyRange {
                min: dec!(6),
                max: dec!(4)
            }))
        );
    }
}
