//! Pure domain logic: items, periods, money, projection and allocation results.

pub mod allocation;
pub mod error;
pub mod item;
pub mod money;
pub mod period;
pub mod projection;

pub use allocation::{AllocationLine, AllocationResult, AllocationStatus};
pub use error::DomainError;
pub use item::{Item, PricedItem};
pub use money::{Budget, Cents, Price};
pub use period::Period;
pub use projection::{project, project_items, schedule, DEFAULT_GROWTH_RATE};
