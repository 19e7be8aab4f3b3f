//! Price projection: compounding a base price over elapsed periods.
//!
//! For period `t` the projected price is `base * rate^(t - 1)`, rounded
//! half-up to two fraction digits. Period 1 returns the base price as given.
//!
//! The power is evaluated in `Decimal` by repeated multiplication, so short
//! horizons stay exact and the rounding step sees the true midpoint
//! (`1000 * 1.035^2 = 1071.225 -> 1071.23`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::DomainError;
use super::item::{Item, PricedItem};
use super::money::{round_currency, Price};
use super::period::Period;

/// Default per-period growth: 3.5%.
pub const DEFAULT_GROWTH_RATE: Decimal = dec!(1.035);

/// Project `base_price` to `period` under `growth_rate`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPeriod`] for period 0,
/// [`DomainError::InvalidGrowthRate`] for a non-positive rate,
/// [`DomainError::NegativePrice`] for a negative base price and
/// [`DomainError::PriceOverflow`] if compounding leaves the decimal range.
pub fn project(base_price: Price, period: u32, growth_rate: Decimal) -> Result<Price, DomainError> {
    if period < 1 {
        return Err(DomainError::InvalidPeriod {
            period,
            max: u32::MAX,
        });
    }
    if growth_rate <= Decimal::ZERO {
        return Err(DomainError::InvalidGrowthRate { rate: growth_rate });
    }
    if base_price.is_sign_negative() && !base_price.is_zero() {
        return Err(DomainError::NegativePrice {
            name: String::new(),
            price: base_price,
        });
    }
    if period == 1 {
        return Ok(base_price);
    }

    let mut price = base_price;
    for _ in 1..period {
        price = price
            .checked_mul(growth_rate)
            .ok_or(DomainError::PriceOverflow { period })?;
    }

    Ok(round_currency(price))
}

/// Project every item in a catalog to the same period.
///
/// Errors carry the offending item's name.
pub fn project_items(
    items: &[Item],
    period: Period,
    growth_rate: Decimal,
) -> Result<Vec<PricedItem>, DomainError> {
    items
        .iter()
        .map(|item| {
            project(item.base_price, period.get(), growth_rate)
                .map(|price| item.priced(price))
                .map_err(|err| match err {
                    DomainError::NegativePrice { price, .. } => DomainError::NegativePrice {
                        name: item.name.clone(),
                        price,
                    },
                    other => other,
                })
        })
        .collect()
}

/// Projected price for each period in `periods`.
pub fn schedule(
    base_price: Price,
    periods: impl IntoIterator<Item = Period>,
    growth_rate: Decimal,
) -> Result<Vec<(Period, Price)>, DomainError> {
    periods
        .into_iter()
        .map(|period| project(base_price, period.get(), growth_rate).map(|price| (period, price)))
        .collect()
}
