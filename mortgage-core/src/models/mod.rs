mod affordability;
mod loan_payment;

pub use affordability::{
    AffordabilityByPropertyTax, AffordabilityQuery, DEFAULT_LOAN_TERM_YEARS, HousePricePoint,
    PriceRangeData, RangeValues,
};
pub use loan_payment::{LoanPaymentParameters, PaymentBreakdown};
