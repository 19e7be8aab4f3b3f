//! Projection followed by allocation.
//!
//! A [`Planner`] prices a catalog for one period and hands the priced items
//! to a [`BudgetAllocator`]. Every run gets its own id, carried on the
//! `allocation` span so log lines from nested solver calls can be grouped.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info_span;
use uuid::Uuid;

use super::allocation::BudgetAllocator;
use crate::domain::{project_items, AllocationResult, Budget, Item, Period, PricedItem};
use crate::error::Result;

/// One allocation request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub items: Vec<Item>,
    pub budget: Budget,
    pub period: Period,
}

/// Outcome of a planning run.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub run_id: Uuid,
    pub period: Period,
    pub growth_rate: Decimal,
    pub allocation: AllocationResult,
}

/// Prices and allocates catalogs under a fixed growth rate.
#[derive(Debug, Clone)]
pub struct Planner {
    growth_rate: Decimal,
    allocator: BudgetAllocator,
}

impl Planner {
    #[must_use]
    pub const fn new(growth_rate: Decimal, allocator: BudgetAllocator) -> Self {
        Self {
            growth_rate,
            allocator,
        }
    }

    #[must_use]
    pub const fn growth_rate(&self) -> Decimal {
        self.growth_rate
    }

    #[must_use]
    pub const fn allocator(&self) -> &BudgetAllocator {
        &self.allocator
    }

    /// Project every item to `period`.
    ///
    /// # Errors
    ///
    /// Returns a domain error for a negative base price or a price that
    /// overflows while compounding.
    pub fn price(&self, items: &[Item], period: Period) -> Result<Vec<PricedItem>> {
        Ok(project_items(items, period, self.growth_rate)?)
    }

    /// Price the catalog for the requested period and allocate the budget.
    ///
    /// # Errors
    ///
    /// Propagates projection and allocation errors.
    pub fn plan(&self, request: &PlanRequest) -> Result<Plan> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "allocation",
            %run_id,
            items = request.items.len(),
            budget = %request.budget,
            period = request.period.get(),
        );
        let _guard = span.enter();

        let priced = self.price(&request.items, request.period)?;
        let allocation = self.allocator.allocate(&priced, request.budget)?;

        Ok(Plan {
            run_id,
            period: request.period,
            growth_rate: self.growth_rate,
            allocation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AllocationStatus, DEFAULT_GROWTH_RATE};
    use crate::testkit::config::allocator;
    use rust_decimal_macros::dec;

    fn planner() -> Planner {
        Planner::new(DEFAULT_GROWTH_RATE, allocator())
    }

    #[test]
    fn prices_then_allocates() {
        let request = PlanRequest {
            items: vec![Item::new("chair", dec!(1000))],
            budget: dec!(5000),
            period: Period::try_new(3).unwrap(),
        };

        let plan = planner().plan(&request).unwrap();
        let allocation = &plan.allocation;

        assert_eq!(allocation.status, AllocationStatus::Optimal);
        assert_eq!(allocation.items[0].adjusted_price, dec!(1071.23));
        assert_eq!(allocation.quantities, vec![4]);
        assert_eq!(allocation.total_spend, dec!(4284.92));
        assert!(allocation.exhausted);
        assert_eq!(plan.period.get(), 3);
    }

    #[test]
    fn run_ids_differ() {
        let request = PlanRequest {
            items: vec![Item::new("a", dec!(3))],
            budget: dec!(10),
            period: Period::FIRST,
        };
        let planner = planner();

        let first = planner.plan(&request).unwrap();
        let second = planner.plan(&request).unwrap();
        assert_ne!(first.run_id, second.run_id);
        assert_eq!(first.allocation, second.allocation);
    }

    #[test]
    fn negative_base_price_names_the_item() {
        let err = planner()
            .price(&[Item::new("broken", dec!(-5))], Period::FIRST)
            .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
