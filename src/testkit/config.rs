//! Canonical test configurations.
//!
//! Single source of truth for solver settings used across tests.

use std::sync::Arc;
use std::time::Duration;

use crate::adapter::outbound::solver::{BranchAndBoundSolver, DynamicProgrammingSolver};
use crate::application::allocation::{BudgetAllocator, SolverBackend, SolverConfig};
use crate::port::SolveLimits;

/// Exact, quiet solver settings with a generous time limit.
pub fn exact() -> SolverConfig {
    SolverConfig {
        backend: SolverBackend::Auto,
        relative_gap_tolerance: 0.0,
        time_limit_seconds: 30.0,
        verbose_solver_log: false,
        ..SolverConfig::default()
    }
}

/// Limits matching [`exact`].
pub fn exact_limits() -> SolveLimits {
    SolveLimits::new(0.0, Duration::from_secs(30), false)
}

/// Dynamic programming with branch-and-bound above the default limit.
pub fn allocator() -> BudgetAllocator {
    allocator_with_limit(exact().dp_capacity_limit)
}

/// Dynamic programming up to `limit` reduced cents, branch-and-bound above.
pub fn allocator_with_limit(limit: u64) -> BudgetAllocator {
    let config = SolverConfig {
        dp_capacity_limit: limit,
        ..exact()
    };
    BudgetAllocator::with_fallback(
        config,
        Arc::new(DynamicProgrammingSolver::new(limit)),
        Arc::new(BranchAndBoundSolver::new()),
    )
}

/// Exact settings whose deadline has passed before the solve starts.
pub fn expired() -> SolverConfig {
    SolverConfig {
        time_limit_seconds: 0.0,
        ..exact()
    }
}

/// Branch-and-bound only.
pub fn branch_and_bound_allocator() -> BudgetAllocator {
    branch_and_bound_allocator_with(exact())
}

/// Branch-and-bound only, under `config`.
pub fn branch_and_bound_allocator_with(config: SolverConfig) -> BudgetAllocator {
    BudgetAllocator::new(config, Arc::new(BranchAndBoundSolver::new()))
}
