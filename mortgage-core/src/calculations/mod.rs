//! Mortgage calculation modules.
//!
//! The annuity math works in `f64` (the formulas are exponential and invalid
//! domains must surface as the native NaN/infinity values); everything that
//! touches money or sampled rates stays in [`rust_decimal::Decimal`].

pub mod affordability;
pub mod annuity;
pub mod common;
pub mod monthly_payment;
pub mod ranges;

pub use affordability::{AffordabilityError, calculate_affordability};
pub use annuity::{amortized_payment, present_value};
pub use monthly_payment::{MonthlyPaymentError, calculate_monthly_payment};
pub use ranges::{RangeError, generate_range, interest_rate_samples, property_tax_samples};
