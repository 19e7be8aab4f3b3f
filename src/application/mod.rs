//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate the solver
//! port to implement the application's use cases.

pub mod allocation;
pub mod plan;

pub use allocation::{BudgetAllocator, SolverBackend, SolverConfig};
pub use plan::{Plan, PlanRequest, Planner};
