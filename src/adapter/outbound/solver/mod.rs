//! Solver implementations for the integer allocation problem.
//!
//! Implements the `port::Solver` trait with concrete backends.

mod branch_bound;
mod common;
mod dynamic;
#[cfg(feature = "highs")]
mod highs;

pub use branch_bound::BranchAndBoundSolver;
pub use dynamic::{DynamicProgrammingSolver, MAX_DP_ITEMS};
#[cfg(feature = "highs")]
pub use highs::HighsSolver;
