//! Monetary types and integer cent scaling.
//!
//! Prices and budgets are `Decimal` so two-digit currency values stay exact.
//! The solvers work on integer cents.
//!
//! Rounding is pinned for the whole pipeline: prices round half-up (midpoint
//! away from zero), budgets truncate. Truncating the budget keeps every
//! allocation within the real budget when it carries more than two fraction
//! digits.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::DomainError;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Budget represented as a Decimal for precision.
pub type Budget = Decimal;

/// Smallest currency unit used by the solvers.
pub type Cents = u64;

/// Fraction digits kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

const CENTS_PER_UNIT: Decimal = Decimal::ONE_HUNDRED;

/// Round a currency amount to two fraction digits, half-up.
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Scale a price to integer cents, rounding half-up.
///
/// `field` names the value in the overflow error.
pub fn price_to_cents(field: &str, price: Price) -> Result<Cents, DomainError> {
    scale(field, price, RoundingStrategy::MidpointAwayFromZero)
}

/// Scale a budget to integer cents, truncating any sub-cent remainder.
pub fn budget_to_cents(budget: Budget) -> Result<Cents, DomainError> {
    if budget.is_sign_negative() && !budget.is_zero() {
        return Err(DomainError::NegativeBudget { budget });
    }
    scale("budget", budget, RoundingStrategy::ToZero)
}

/// Convert integer cents back to a currency amount.
#[must_use]
pub fn cents_to_decimal(cents: Cents) -> Decimal {
    Decimal::from(cents) / CENTS_PER_UNIT
}

fn scale(field: &str, value: Decimal, strategy: RoundingStrategy) -> Result<Cents, DomainError> {
    let overflow = || DomainError::ScalingOverflow {
        field: field.to_string(),
        value,
    };

    value
        .checked_mul(CENTS_PER_UNIT)
        .ok_or_else(overflow)?
        .round_dp_with_strategy(0, strategy)
        .to_u64()
        .ok_or_else(overflow)
}
