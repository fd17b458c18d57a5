//! Present-value and amortization math for fixed-payment loans.
//!
//! Both functions follow the conventional spreadsheet sign convention: cash
//! outflows are negative. They are the two directions of the same annuity
//! identity, so `amortized_payment(-present_value(r, n, pmt), r, n)`
//! recovers `pmt` up to floating-point error.
//!
//! These are the only `f64` functions in the crate. They perform no
//! validation; an invalid domain (negative period count, absurd rates)
//! propagates as NaN or infinity, which the engines above translate into
//! typed errors at the `Decimal` boundary.

/// Computes the present value of a fixed-payment annuity.
///
/// Equivalent to the spreadsheet `PV` function.
///
/// # Arguments
///
/// * `rate` - The interest rate per period
/// * `periods` - The total number of payment periods
/// * `payment` - The payment made each period
///
/// # Examples
///
/// ```
/// use mortgage_core::calculations::annuity::present_value;
///
/// // 5% annual rate, 30 years, $1,000 per month
/// let pv = present_value(0.05 / 12.0, 360.0, 1000.0);
/// assert!((pv + 186_281.62).abs() < 0.01);
///
/// // Zero rate degenerates to a straight sum
/// assert_eq!(present_value(0.0, 12.0, 1000.0), -12_000.0);
/// ```
pub fn present_value(
    rate: f64,
    periods: f64,
    payment: f64,
) -> f64 {
    // Zero rate would divide by zero; the annuity degenerates to a straight sum.
    if rate == 0.0 {
        return -payment * periods;
    }

    -payment * ((1.0 - (1.0 + rate).powf(-periods)) / rate)
}

/// Computes the fixed periodic payment that amortizes a loan.
///
/// # Arguments
///
/// * `loan_amount` - The principal borrowed
/// * `monthly_rate` - The interest rate per period
/// * `payments` - The total number of payments
///
/// # Examples
///
/// ```
/// use mortgage_core::calculations::annuity::amortized_payment;
///
/// // $240,000 at 5% over 30 years
/// let pmt = amortized_payment(240_000.0, 0.05 / 12.0, 360.0);
/// assert!((pmt - 1288.37).abs() < 0.01);
/// ```
pub fn amortized_payment(
    loan_amount: f64,
    monthly_rate: f64,
    payments: f64,
) -> f64 {
    if monthly_rate == 0.0 {
        return loan_amount / payments;
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}
