//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! Every variant is an input error: it is detected before any search starts
//! and the allocator never runs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use outlay::domain::error::DomainError;
//! use outlay::domain::projection::project;
//! use rust_decimal_macros::dec;
//!
//! // Period zero does not exist
//! let result = project(dec!(1000), 0, dec!(1.035));
//!
//! assert!(matches!(result, Err(DomainError::InvalidPeriod { period: 0, .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The allocator needs at least one item.
    #[error("item catalog cannot be empty")]
    EmptyCatalog,

    /// Prices must not be negative.
    #[error("price of '{name}' must not be negative, got {price}")]
    NegativePrice {
        /// Item name.
        name: String,
        /// The invalid price.
        price: Decimal,
    },

    /// Budgets must not be negative.
    #[error("budget must not be negative, got {budget}")]
    NegativeBudget {
        /// The invalid budget.
        budget: Decimal,
    },

    /// Periods start at 1.
    #[error("period must be between 1 and {max}, got {period}")]
    InvalidPeriod {
        /// The invalid period.
        period: u32,
        /// Largest accepted period.
        max: u32,
    },

    /// Growth rates must be strictly positive.
    #[error("growth rate must be positive, got {rate}")]
    InvalidGrowthRate {
        /// The invalid rate.
        rate: Decimal,
    },

    /// A value does not fit once scaled to integer cents.
    #[error("{field} {value} is too large to scale to cents")]
    ScalingOverflow {
        /// Which input overflowed (`budget` or an item name).
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// Compounding overflowed the decimal range.
    #[error("price overflowed while compounding to period {period}")]
    PriceOverflow {
        /// Period being projected.
        period: u32,
    },
}
