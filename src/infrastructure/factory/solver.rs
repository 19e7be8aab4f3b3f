//! Solver factory.
//!
//! Wires search backends into a [`BudgetAllocator`] according to the
//! `[solver]` configuration section.

use std::sync::Arc;

use crate::adapter::outbound::solver::{BranchAndBoundSolver, DynamicProgrammingSolver};
use crate::application::allocation::{BudgetAllocator, SolverBackend, SolverConfig};
use crate::application::plan::Planner;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build an allocator for the configured backend.
///
/// `auto` pairs dynamic programming with a branch-and-bound fallback for
/// capacities above `dp_capacity_limit`.
///
/// # Errors
///
/// Returns a configuration error if `highs` is selected in a build without
/// the `highs` feature.
pub fn build_allocator(config: &SolverConfig) -> Result<BudgetAllocator> {
    let dynamic = || Arc::new(DynamicProgrammingSolver::new(config.dp_capacity_limit));
    let branch_and_bound = || Arc::new(BranchAndBoundSolver::new());

    let allocator = match config.backend {
        SolverBackend::Auto => {
            BudgetAllocator::with_fallback(config.clone(), dynamic(), branch_and_bound())
        }
        SolverBackend::Dynamic => BudgetAllocator::new(config.clone(), dynamic()),
        SolverBackend::BranchAndBound => BudgetAllocator::new(config.clone(), branch_and_bound()),
        SolverBackend::Highs => build_highs(config)?,
    };
    Ok(allocator)
}

#[cfg(feature = "highs")]
fn build_highs(config: &SolverConfig) -> Result<BudgetAllocator> {
    use crate::adapter::outbound::solver::HighsSolver;

    Ok(BudgetAllocator::new(config.clone(), Arc::new(HighsSolver::new())))
}

#[cfg(not(feature = "highs"))]
fn build_highs(_config: &SolverConfig) -> Result<BudgetAllocator> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "backend",
        reason: "the highs backend requires building with --features highs".to_string(),
    }
    .into())
}

/// Build a planner from the full configuration.
///
/// # Errors
///
/// Propagates [`build_allocator`] errors.
pub fn build_planner(config: &Config) -> Result<Planner> {
    let allocator = build_allocator(&config.solver)?;
    Ok(Planner::new(config.pricing.growth_rate, allocator))
}
