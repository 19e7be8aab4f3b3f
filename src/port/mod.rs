//! Backend contracts. Ports see the domain and nothing else.
//!
//! Search backends implement these traits to plug into the allocator.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌──────────┐          ┌───────────────┐              ┌───────────┐
//! │ Dynamic  │          │ Branch-and-   │              │  HiGHS    │
//! │ program  │          │ bound         │              │ (feature) │
//! └──────────┘          └───────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::solver::Solver`] - Integer allocation backend

pub mod outbound;

pub use outbound::solver::{KnapsackProblem, KnapsackSolution, SolveLimits, Solver};
