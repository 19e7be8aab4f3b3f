//! Allocation solver settings.
//!
//! Passed explicitly into every allocator; nothing here is process-wide.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::port::SolveLimits;

/// Which search backend the allocator uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    /// Dynamic programming up to `dp_capacity_limit`, branch-and-bound above.
    #[default]
    Auto,
    /// Always dynamic programming.
    Dynamic,
    /// Always branch-and-bound.
    BranchAndBound,
    /// HiGHS through `good_lp` (requires the `highs` feature).
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Dynamic => "dynamic",
            Self::BranchAndBound => "branch_and_bound",
            Self::Highs => "highs",
        };
        f.write_str(name)
    }
}

/// Solver tolerance, time and logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: SolverBackend,

    /// Accepted relative gap between proven bound and incumbent, in `[0, 1)`.
    ///
    /// The dynamic programming backend is always exact; the gap applies to
    /// branch-and-bound, HiGHS and time-limited results.
    #[serde(default = "default_relative_gap_tolerance")]
    pub relative_gap_tolerance: f64,

    /// Wall-clock limit per allocation, in seconds.
    #[serde(default = "default_time_limit_seconds")]
    pub time_limit_seconds: f64,

    /// Surface solver progress at `info` level.
    #[serde(default = "default_verbose_solver_log")]
    pub verbose_solver_log: bool,

    /// Largest gcd-reduced capacity (in cents) solved by dynamic programming
    /// under `backend = "auto"`. The table costs two bytes per unit.
    #[serde(default = "default_dp_capacity_limit")]
    pub dp_capacity_limit: u64,
}

fn default_relative_gap_tolerance() -> f64 {
    0.01
}

fn default_time_limit_seconds() -> f64 {
    60.0
}

fn default_verbose_solver_log() -> bool {
    true
}

fn default_dp_capacity_limit() -> u64 {
    20_000_000
}

impl SolverConfig {
    /// Wall-clock limit as a `Duration`; unrepresentable values become zero.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_limit_seconds).unwrap_or(Duration::ZERO)
    }

    /// Start a solve clock with these settings.
    #[must_use]
    pub fn limits(&self) -> SolveLimits {
        SolveLimits::new(
            self.relative_gap_tolerance,
            self.time_limit(),
            self.verbose_solver_log,
        )
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::default(),
            relative_gap_tolerance: default_relative_gap_tolerance(),
            time_limit_seconds: default_time_limit_seconds(),
            verbose_solver_log: default_verbose_solver_log(),
            dp_capacity_limit: default_dp_capacity_limit(),
        }
    }
}
