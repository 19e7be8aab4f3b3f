//! Budget allocation use case.

pub mod allocator;
pub mod config;

pub use allocator::BudgetAllocator;
pub use config::{SolverBackend, SolverConfig};
