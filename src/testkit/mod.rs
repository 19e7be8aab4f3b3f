//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for items, catalogs and knapsack problems.
//! - [`config`] - Canonical solver configurations and allocators.

pub mod config;
pub mod domain;
