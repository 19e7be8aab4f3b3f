//! Outlay - spend a fixed budget on compounding-price items with as little
//! left over as possible.
//!
//! Prices grow by a fixed rate each period. For a chosen period the crate
//! projects every item's price, then picks non-negative integer quantities
//! whose total cost stays within the budget and comes as close to it as
//! possible (an unbounded knapsack over integer cents).
//!
//! # Architecture
//!
//! - [`domain`] - Items, periods, money scaling, price projection and
//!   allocation results
//! - [`port`] - The `Solver` trait backends implement
//! - [`adapter`] - Search backends (dynamic programming, branch-and-bound,
//!   HiGHS) and the CLI
//! - [`application`] - The budget allocator and the project-then-allocate
//!   planner
//! - [`infrastructure`] - TOML configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `highs` - HiGHS mixed-integer backend through `good_lp`
//! - `testkit` - Test builders for integration tests
//!
//! # Example
//!
//! ```
//! use outlay::domain::{project, DEFAULT_GROWTH_RATE};
//! use rust_decimal_macros::dec;
//!
//! let price = project(dec!(1000), 3, DEFAULT_GROWTH_RATE).unwrap();
//! assert_eq!(price, dec!(1071.23));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
