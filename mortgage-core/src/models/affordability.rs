use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan term assumed when a query does not carry one.
pub const DEFAULT_LOAN_TERM_YEARS: u32 = 30;

/// An inclusive numeric interval. Consumers assume `min <= max`; the sweep
/// generators reject inverted intervals, nothing else validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValues {
    pub min: Decimal,
    pub max: Decimal,
}

/// Input to the affordability estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityQuery {
    /// Desired total monthly payment, taxes and fees included.
    pub monthly_payment: Decimal,
    pub down_payment: Decimal,
    /// Annual interest rate interval, in percent.
    pub interest_rate_range: RangeValues,
    /// Annual property tax interval, in dollars.
    pub property_tax_range: RangeValues,
    /// Annual insurance, in dollars.
    pub insurance: Decimal,
    /// Monthly HOA fee, in dollars.
    pub hoa: Decimal,
    pub loan_term_years: u32,
}

impl Default for AffordabilityQuery {
    /// The estimator's initial form state.
    fn default() -> Self {
        Self {
            monthly_payment: Decimal::from(2_000),
            down_payment: Decimal::from(80_000),
            interest_rate_range: RangeValues {
                min: Decimal::from(4),
                max: Decimal::from(6),
            },
            property_tax_range: RangeValues {
                min: Decimal::from(5_000),
                max: Decimal::from(9_000),
            },
            insurance: Decimal::from(1_000),
            hoa: Decimal::ZERO,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
        }
    }
}

/// Affordable house price at one sampled interest rate, rounded to whole
/// dollars. Negative when the payment budget cannot cover the fixed costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousePricePoint {
    pub interest_rate: Decimal,
    pub house_price: Decimal,
}

/// Affordability band for one sampled property-tax value: the extrema of
/// `house_prices` plus the full per-rate detail, ascending by rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeData {
    pub min: Decimal,
    pub max: Decimal,
    pub house_prices: Vec<HousePricePoint>,
}

/// Estimator result, keyed by sampled annual property tax in ascending order.
pub type AffordabilityByPropertyTax = BTreeMap<Decimal, PriceRangeData>;
