//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Item`], [`PricedItem`] and
//! [`KnapsackProblem`] so tests focus on assertions rather than
//! construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Item, PricedItem};
use crate::port::KnapsackProblem;

/// Create an [`Item`] from a name and base price.
pub fn item(name: &str, base_price: Decimal) -> Item {
    Item::new(name, base_price)
}

/// Create a [`PricedItem`] from a name and adjusted price.
pub fn priced(name: &str, adjusted_price: Decimal) -> PricedItem {
    PricedItem::new(name, adjusted_price)
}

/// Priced items named `item-0`, `item-1`, ... for the given prices.
pub fn catalog(prices: &[Decimal]) -> Vec<PricedItem> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricedItem::new(format!("item-{i}"), price))
        .collect()
}

/// Base-price items named `Item 1`, `Item 2`, ... for the given prices.
pub fn items(prices: &[Decimal]) -> Vec<Item> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| Item::new(format!("Item {}", i + 1), price))
        .collect()
}

/// Create a [`KnapsackProblem`] in cents.
pub fn problem(weights: &[u64], capacity: u64) -> KnapsackProblem {
    KnapsackProblem::new(weights.to_vec(), capacity)
}

/// Best reachable total by exhaustive search. Exponential; small inputs only.
pub fn brute_force_best(weights: &[u64], capacity: u64) -> u64 {
    fn go(weights: &[u64], remaining: u64) -> u64 {
        match weights.split_first() {
            None => 0,
            Some((&w, rest)) => (0..=remaining / w)
                .map(|q| q * w + go(rest, remaining - q * w))
                .max()
                .unwrap_or(0),
        }
    }
    go(weights, capacity)
}
