//! Solver port for the integer allocation problem.
//!
//! Prices and budget arrive already scaled to integer cents:
//!
//! ```text
//! maximize    sum(w[i] * x[i])
//! subject to  sum(w[i] * x[i]) <= capacity
//!             x[i] >= 0, integer
//! ```
//!
//! # Overview
//!
//! - [`Solver`]: backend interface
//! - [`KnapsackProblem`]: problem definition
//! - [`SolveLimits`]: gap tolerance, deadline and logging verbosity
//! - [`KnapsackSolution`]: solution representation

use std::time::{Duration, Instant};

use crate::domain::{AllocationStatus, Cents};
use crate::error::Result;

/// Integer allocation solver.
///
/// Implementations wrap specific search strategies (dynamic programming,
/// branch-and-bound, an external MIP engine) behind one interface.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one configured allocator can be
/// shared across threads. They hold no mutable state between calls.
///
/// # Implementation Notes
///
/// - Weights are strictly positive; zero weights are rejected upstream
/// - Report [`AllocationStatus::Optimal`] only when optimality is proven
///   within `limits.relative_gap`
/// - On deadline expiry return the best feasible assignment found with
///   [`AllocationStatus::NotSolved`]
/// - Equal inputs must produce equal quantities
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve the problem within the given limits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails. Time-outs are a
    /// status, not an error.
    fn solve(&self, problem: &KnapsackProblem, limits: &SolveLimits) -> Result<KnapsackSolution>;

    /// Return `true` if this backend can take the problem at all.
    ///
    /// Backends with size limits override this; the default accepts
    /// everything.
    fn accepts(&self, _problem: &KnapsackProblem) -> bool {
        true
    }
}

/// Integer knapsack over cents where each item's value equals its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackProblem {
    /// Item prices in cents, index-aligned with the catalog. All positive.
    pub weights: Vec<Cents>,

    /// Budget in cents.
    pub capacity: Cents,
}

impl KnapsackProblem {
    /// Create a problem.
    #[must_use]
    pub const fn new(weights: Vec<Cents>, capacity: Cents) -> Self {
        Self { weights, capacity }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.weights.len()
    }

    /// Greatest common divisor of all weights (0 for an empty problem).
    #[must_use]
    pub fn weight_gcd(&self) -> Cents {
        self.weights.iter().copied().fold(0, gcd)
    }

    /// Divide weights and capacity by the weight gcd.
    ///
    /// Every achievable sum is a multiple of the gcd, so the reduced problem
    /// has the same optimal quantities. Returns the problem and the factor to
    /// multiply sums by.
    #[must_use]
    pub fn reduced(&self) -> (Self, Cents) {
        let g = self.weight_gcd();
        if g <= 1 {
            return (self.clone(), 1);
        }
        let reduced = Self {
            weights: self.weights.iter().map(|w| w / g).collect(),
            capacity: self.capacity / g,
        };
        (reduced, g)
    }

    /// Largest achievable-in-principle sum: capacity rounded down to the gcd.
    #[must_use]
    pub fn upper_bound(&self) -> Cents {
        match self.weight_gcd() {
            0 => 0,
            g => self.capacity / g * g,
        }
    }

    /// `sum(w[i] * q[i])`, or `None` on overflow.
    #[must_use]
    pub fn total(&self, quantities: &[u64]) -> Option<Cents> {
        self.weights
            .iter()
            .zip(quantities)
            .try_fold(0u64, |acc, (&w, &q)| acc.checked_add(w.checked_mul(q)?))
    }
}

/// Euclid's algorithm.
#[must_use]
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Search limits handed to every [`Solver::solve`] call.
#[derive(Debug, Clone)]
pub struct SolveLimits {
    /// Accepted relative distance between bound and incumbent.
    pub relative_gap: f64,

    /// Wall-clock budget for the search.
    pub time_limit: Duration,

    /// Emit progress events at `info` instead of `trace`.
    pub verbose: bool,

    started: Instant,
}

impl SolveLimits {
    /// Start the clock now.
    #[must_use]
    pub fn new(relative_gap: f64, time_limit: Duration, verbose: bool) -> Self {
        Self {
            relative_gap,
            time_limit,
            verbose,
            started: Instant::now(),
        }
    }

    /// Time since the limits were created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Return `true` once the time limit has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.time_limit
    }

    /// Return `true` if `incumbent` is within the relative gap of `bound`.
    #[must_use]
    pub fn within_gap(&self, bound: Cents, incumbent: Cents) -> bool {
        if incumbent >= bound {
            return true;
        }
        (bound - incumbent) as f64 <= self.relative_gap * bound as f64
    }
}

impl Default for SolveLimits {
    fn default() -> Self {
        Self::new(0.0, Duration::from_secs(60), false)
    }
}

/// Solution to a [`KnapsackProblem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    /// Quantity per item, index-aligned with the problem's weights.
    pub quantities: Vec<u64>,

    /// Achieved sum in cents.
    pub total: Cents,

    /// Best proven upper bound on the sum, in cents.
    pub bound: Cents,

    /// Termination status.
    pub status: AllocationStatus,

    /// Work performed (DP cells or search nodes), for logging.
    pub work: u64,
}

impl KnapsackSolution {
    /// Return `true` if the solver proved optimality.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }
}
