use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::affordability::DEFAULT_LOAN_TERM_YEARS;

/// Input to the monthly payment calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPaymentParameters {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    /// Annual interest rate, in percent.
    pub interest_rate: Decimal,
    pub loan_term_years: u32,
    pub annual_tax: Decimal,
    pub annual_insurance: Decimal,
    pub monthly_hoa: Decimal,
}

impl Default for LoanPaymentParameters {
    fn default() -> Self {
        Self {
            home_price: Decimal::ZERO,
            down_payment: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            annual_tax: Decimal::ZERO,
            annual_insurance: Decimal::ZERO,
            monthly_hoa: Decimal::ZERO,
        }
    }
}

/// Monthly payment split into its components, each rounded to cents.
///
/// `total_monthly_payment` is the sum of the four rounded components.
/// `principal_and_interest` (and so the total) goes negative when the home
/// price is below the down payment; that is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub total_monthly_payment: Decimal,
    pub principal_and_interest: Decimal,
    pub monthly_property_tax: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_hoa: Decimal,
}
