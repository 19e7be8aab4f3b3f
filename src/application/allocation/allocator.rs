//! Budget allocator.
//!
//! Validates a priced catalog and budget, scales both to integer cents,
//! picks a search backend, and packages the solver's answer into an
//! [`AllocationResult`].
//!
//! Input problems are errors (`Err`); `Unbounded`, `NotSolved` and `Optimal`
//! are statuses on an `Ok` result.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::money::{budget_to_cents, cents_to_decimal, price_to_cents, round_currency};
use crate::domain::{AllocationResult, AllocationStatus, Budget, DomainError, PricedItem};
use crate::error::{Error, Result};
use crate::port::{KnapsackProblem, Solver};

use super::config::SolverConfig;

/// Solver name reported when the search is skipped.
const PRESOLVE: &str = "presolve";

/// Allocates a budget across a priced catalog.
///
/// Holds its own [`SolverConfig`]; two allocators never share settings.
#[derive(Clone)]
pub struct BudgetAllocator {
    config: SolverConfig,
    primary: Arc<dyn Solver>,
    /// Used for problems `primary` does not accept.
    fallback: Option<Arc<dyn Solver>>,
}

impl BudgetAllocator {
    /// Always use `solver`.
    #[must_use]
    pub fn new(config: SolverConfig, solver: Arc<dyn Solver>) -> Self {
        Self {
            config,
            primary: solver,
            fallback: None,
        }
    }

    /// Use `primary` for every problem it accepts and `fallback` for the rest.
    #[must_use]
    pub fn with_fallback(
        config: SolverConfig,
        primary: Arc<dyn Solver>,
        fallback: Arc<dyn Solver>,
    ) -> Self {
        Self {
            config,
            primary,
            fallback: Some(fallback),
        }
    }

    /// Return the solver configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Pick the backend for a problem: the primary one if it accepts the
    /// problem, otherwise the large-problem fallback when there is one.
    #[must_use]
    pub fn select(&self, problem: &KnapsackProblem) -> &dyn Solver {
        match &self.fallback {
            Some(fallback) if !self.primary.accepts(problem) => fallback.as_ref(),
            _ => self.primary.as_ref(),
        }
    }

    /// Allocate `budget` across `items`.
    ///
    /// Prices are charged rounded half-up to the cent, and the result's items
    /// carry those charged prices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] for an empty catalog, a negative price or
    /// budget, or values too large to scale to cents, and [`Error::Solver`]
    /// if a backend fails or returns an inconsistent assignment.
    pub fn allocate(&self, items: &[PricedItem], budget: Budget) -> Result<AllocationResult> {
        if items.is_empty() {
            return Err(DomainError::EmptyCatalog.into());
        }
        let capacity = budget_to_cents(budget)?;

        let mut charged = Vec::with_capacity(items.len());
        let mut weights = Vec::with_capacity(items.len());
        for item in items {
            if item.adjusted_price < Decimal::ZERO {
                return Err(DomainError::NegativePrice {
                    name: item.name.clone(),
                    price: item.adjusted_price,
                }
                .into());
            }
            weights.push(price_to_cents(&item.name, item.adjusted_price)?);
            charged.push(PricedItem::new(
                item.name.clone(),
                round_currency(item.adjusted_price),
            ));
        }

        if let Some(index) = weights.iter().position(|&w| w == 0) {
            warn!(
                item = %charged[index].name,
                "Zero-price item admits unlimited quantity"
            );
            return Ok(AllocationResult::empty(
                AllocationStatus::Unbounded,
                charged,
                budget,
                PRESOLVE,
            ));
        }

        let problem = KnapsackProblem::new(weights, capacity);
        let solver = self.select(&problem);
        let limits = self.config.limits();
        debug!(
            solver = solver.name(),
            items = problem.num_vars(),
            capacity,
            gcd = problem.weight_gcd(),
            "Solving allocation"
        );

        let solution = solver.solve(&problem, &limits)?;

        if solution.quantities.len() != problem.num_vars()
            || problem.total(&solution.quantities) != Some(solution.total)
            || solution.total > capacity
        {
            return Err(Error::Solver(format!(
                "{} returned an inconsistent assignment",
                solver.name()
            )));
        }

        let result = AllocationResult::new(
            solution.status,
            charged,
            solution.quantities,
            budget,
            cents_to_decimal(solution.bound),
            solver.name(),
        );

        info!(
            solver = solver.name(),
            status = %result.status,
            total_spend = %result.total_spend,
            leftover = %result.leftover,
            exhausted = result.exhausted,
            work = solution.work,
            elapsed_ms = limits.elapsed().as_millis() as u64,
            "Allocation finished"
        );
        if result.status == AllocationStatus::NotSolved {
            warn!(gap = %result.gap, "Returning best assignment found before the time limit");
        }

        Ok(result)
    }
}

impl std::fmt::Debug for BudgetAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetAllocator")
            .field("config", &self.config)
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.as_ref().map(|s| s.name()))
            .finish()
    }
}
