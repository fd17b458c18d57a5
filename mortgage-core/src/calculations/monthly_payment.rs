//! Monthly mortgage payment breakdown.
//!
//! The principal-and-interest component comes from the amortization formula;
//! taxes and insurance are the annual figures spread over twelve months; the
//! HOA fee is already monthly. Each component is rounded to cents and the
//! total is the sum of the rounded components.
//!
//! Beyond a zero loan term, inputs are not validated: a down payment larger
//! than the home price simply yields a negative loan and a negative payment.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::calculate_monthly_payment;
//! use mortgage_core::models::LoanPaymentParameters;
//!
//! let params = LoanPaymentParameters {
//!     home_price: dec!(300000),
//!     down_payment: dec!(60000),
//!     interest_rate: dec!(5),
//!     loan_term_years: 30,
//!     annual_tax: dec!(3600),
//!     annual_insurance: dec!(1200),
//!     monthly_hoa: dec!(50),
//! };
//!
//! let breakdown = calculate_monthly_payment(&params).unwrap();
//! assert_eq!(breakdown.principal_and_interest, dec!(1288.37));
//! assert_eq!(breakdown.total_monthly_payment, dec!(1738.37));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::annuity::amortized_payment;
use crate::calculations::common::{decimal_from_f64, decimal_to_f64, round_half_up};
use crate::models::{LoanPaymentParameters, PaymentBreakdown};

/// Errors that can occur while computing a payment breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthlyPaymentError {
    /// The loan term is zero years.
    #[error("loan term must be at least one year")]
    InvalidLoanTerm,

    /// The amortization produced a non-finite payment.
    #[error("amortized payment is not a finite number")]
    NonFinitePayment,
}

/// Computes the total monthly payment and its component breakdown.
///
/// # Errors
///
/// Returns [`MonthlyPaymentError`] if the loan term is zero or the
/// amortized payment is not a finite number.
pub fn calculate_monthly_payment(
    params: &LoanPaymentParameters,
) -> Result<PaymentBreakdown, MonthlyPaymentError> {
    if params.loan_term_years == 0 {
        return Err(MonthlyPaymentError::InvalidLoanTerm);
    }

    let loan_amount = params.home_price - params.down_payment;
    let monthly_rate = decimal_to_f64(params.interest_rate) / 100.0 / 12.0;
    let payments = f64::from(params.loan_term_years * 12);

    let principal_and_interest = decimal_from_f64(amortized_payment(
        decimal_to_f64(loan_amount),
        monthly_rate,
        payments,
    ))
    .map(round_half_up)
    .ok_or(MonthlyPaymentError::NonFinitePayment)?;

    let twelve = Decimal::from(12);
    let monthly_property_tax = round_half_up(params.annual_tax / twelve);
    let monthly_insurance = round_half_up(params.annual_insurance / twelve);
    let monthly_hoa = round_half_up(params.monthly_hoa);

    let total_monthly_payment =
        principal_and_interest + monthly_property_tax + monthly_insurance + monthly_hoa;
    debug!(%total_monthly_payment, %principal_and_interest, "computed payment breakdown");

    Ok(PaymentBreakdown {
        total_monthly_payment,
        principal_and_interest,
        monthly_property_tax,
        monthly_insurance,
        monthly_hoa,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_params() -> LoanPaymentParameters {
        LoanPaymentParameters {
            home_price: dec!(300000),
            down_payment: dec!(60000),
            interest_rate: dec!(5),
            loan_term_years: 30,
            annual_tax: dec!(3600),
            annual_insurance: dec!(1200),
            monthly_hoa: dec!(50),
        }
    }

    #[test]
    fn breakdown_standard_case() {
        let result = calculate_monthly_payment(&test_params()).unwrap();

        // $240,000 at 5% over 30 years amortizes at $1,288.37/month
        assert_eq!(result.principal_and_interest, dec!(1288.37));
        assert_eq!(result.monthly_property_tax, dec!(300.00));
        assert_eq!(result.monthly_insurance, dec!(100.00));
        assert_eq!(result.monthly_hoa, dec!(50.00));
        assert_eq!(result.total_monthly_payment, dec!(1738.37));
    }

    #[test]
    fn total_is_the_sum_of_the_rounded_components() {
        let result = calculate_monthly_payment(&test_params()).unwrap();

        assert_eq!(
            result.total_monthly_payment,
            result.principal_and_interest
                + result.monthly_property_tax
                + result.monthly_insurance
                + result.monthly_hoa
        );
    }

    #[test]
    fn zero_rate_divides_the_loan_evenly() {
        let mut params = test_params();
        params.interest_rate = dec!(0);
        params.loan_term_years = 10;
        params.home_price = dec!(120000);
        params.down_payment = dec!(0);

        let result = calculate_monthly_payment(&params).unwrap();

        assert_eq!(result.principal_and_interest, dec!(1000.00));
    }

    #[test]
    fn uneven_annual_figures_round_to_cents() {
        let mut params = test_params();
        params.annual_tax = dec!(1000);
        params.annual_insurance = dec!(850);

        let result = calculate_monthly_payment(&params).unwrap();

        assert_eq!(result.monthly_property_tax, dec!(83.33));
        assert_eq!(result.monthly_insurance, dec!(70.83));
    }

    #[test]
    fn down_payment_above_home_price_goes_negative() {
        let mut params = test_params();
        params.home_price = dec!(100000);
        params.down_payment = dec!(150000);

        let result = calculate_monthly_payment(&params).unwrap();

        assert!(result.principal_and_interest < Decimal::ZERO);
    }

    #[test]
    fn zero_loan_term_is_rejected() {
        let mut params = test_params();
        params.loan_term_years = 0;

        let result = calculate_monthly_payment(&params);

        assert_eq!(result, Err(MonthlyPaymentError::InvalidLoanTerm));
    }

    #[test]
    fn free_house_costs_only_the_fixed_fees() {
        let mut params = test_params();
        params.home_price = dec!(60000); // equal to the down payment

        let result = calculate_monthly_payment(&params).unwrap();

        assert_eq!(result.principal_and_interest, dec!(0.00));
        assert_eq!(result.total_monthly_payment, dec!(450.00));
    }
}
