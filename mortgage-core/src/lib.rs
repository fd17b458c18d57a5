pub mod calculations;
pub mod format;
pub mod models;
pub mod parse;

pub use calculations::{
    AffordabilityError, MonthlyPaymentError, RangeError, calculate_affordability,
    calculate_monthly_payment,
};
pub use models::*;
