//! Allocation outcomes.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::item::PricedItem;
use super::money::{Budget, Price};

/// Termination status of an allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Proven optimal within the configured relative gap.
    Optimal,

    /// No feasible assignment exists.
    ///
    /// The all-zero assignment is always feasible, so only an external
    /// backend can report this.
    Infeasible,

    /// A zero-price item admits unlimited quantity.
    Unbounded,

    /// The time limit expired before optimality was proven. Quantities hold
    /// the best feasible assignment found.
    NotSolved,
}

impl AllocationStatus {
    /// Return `true` for [`AllocationStatus::Optimal`].
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal)
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Optimal => "optimal",
            Self::Infeasible => "infeasible",
            Self::Unbounded => "unbounded",
            Self::NotSolved => "not solved",
        };
        f.write_str(label)
    }
}

/// One row of an allocation: an item, its quantity, and what it costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationLine<'a> {
    pub name: &'a str,
    pub adjusted_price: Price,
    pub quantity: u64,
    pub subtotal: Decimal,
}

/// Result of allocating a budget across a priced catalog.
///
/// `quantities` is index-aligned with `items`. Spend, leftover and the
/// exhausted flag are derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    pub status: AllocationStatus,
    pub items: Vec<PricedItem>,
    pub quantities: Vec<u64>,
    pub budget: Budget,
    pub total_spend: Decimal,
    pub leftover: Decimal,
    /// Leftover cannot buy one more unit of the cheapest positive-price item.
    pub exhausted: bool,
    /// Cheapest positive adjusted price, if any.
    pub min_price: Option<Price>,
    /// Best proven upper bound on spend.
    pub best_bound: Decimal,
    /// Relative distance between `best_bound` and `total_spend`.
    pub gap: Decimal,
    /// Backend that produced the quantities.
    pub solver: String,
}

impl AllocationResult {
    /// Package quantities into a result, deriving spend and leftover.
    ///
    /// `best_bound` is clamped to at least the achieved spend.
    #[must_use]
    pub fn new(
        status: AllocationStatus,
        items: Vec<PricedItem>,
        quantities: Vec<u64>,
        budget: Budget,
        best_bound: Decimal,
        solver: impl Into<String>,
    ) -> Self {
        let total_spend: Decimal = items
            .iter()
            .zip(&quantities)
            .map(|(item, &qty)| item.adjusted_price * Decimal::from(qty))
            .sum();
        let leftover = budget - total_spend;
        let min_price = min_positive_price(&items);
        let exhausted = is_exhausted(leftover, min_price);
        let best_bound = best_bound.max(total_spend);
        let gap = relative_gap(best_bound, total_spend);

        Self {
            status,
            items,
            quantities,
            budget,
            total_spend,
            leftover,
            exhausted,
            min_price,
            best_bound,
            gap,
            solver: solver.into(),
        }
    }

    /// All-zero allocation with the given status.
    #[must_use]
    pub fn empty(
        status: AllocationStatus,
        items: Vec<PricedItem>,
        budget: Budget,
        solver: impl Into<String>,
    ) -> Self {
        let quantities = vec![0; items.len()];
        Self::new(status, items, quantities, budget, Decimal::ZERO, solver)
    }

    /// Iterate over item rows with quantities and subtotals.
    pub fn lines(&self) -> impl Iterator<Item = AllocationLine<'_>> {
        self.items
            .iter()
            .zip(&self.quantities)
            .map(|(item, &quantity)| AllocationLine {
                name: &item.name,
                adjusted_price: item.adjusted_price,
                quantity,
                subtotal: item.adjusted_price * Decimal::from(quantity),
            })
    }

    /// Total number of units bought.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.quantities.iter().sum()
    }
}

/// Cheapest strictly positive price in the catalog.
#[must_use]
pub fn min_positive_price(items: &[PricedItem]) -> Option<Price> {
    items
        .iter()
        .map(|item| item.adjusted_price)
        .filter(|price| *price > Decimal::ZERO)
        .min()
}

/// Leftover is below the cheapest positive price.
///
/// A catalog without positive prices is never exhausted.
#[must_use]
pub fn is_exhausted(leftover: Decimal, min_price: Option<Price>) -> bool {
    min_price.is_some_and(|min| leftover < min)
}

/// `(bound - value) / bound`, or zero when the bound is zero.
#[must_use]
pub fn relative_gap(bound: Decimal, value: Decimal) -> Decimal {
    if bound.is_zero() {
        Decimal::ZERO
    } else {
        ((bound - value) / bound).max(Decimal::ZERO)
    }
}
