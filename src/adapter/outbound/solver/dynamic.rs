//! Exact dynamic programming over achievable sums.
//!
//! Standard unbounded-knapsack reachability. For every sum `s` up to the
//! capacity the table stores the item that first made `s` reachable; walking
//! that table backwards from the best sum rebuilds the quantities.
//!
//! Items are processed in catalog order and sums in ascending order, so each
//! sum is attributed to the lowest-index item that can complete it. The same
//! input always yields the same quantities.

use super::common::{ensure_positive_weights, progress};
use crate::domain::AllocationStatus;
use crate::error::{Error, Result};
use crate::port::{KnapsackProblem, KnapsackSolution, SolveLimits, Solver};

/// Marker for sums not reached yet.
const UNREACHED: u16 = u16::MAX;

/// Largest item count the table's index width supports.
pub const MAX_DP_ITEMS: usize = UNREACHED as usize;

/// Deadline is polled once per this many cells.
const DEADLINE_CHECK_MASK: u64 = (1 << 16) - 1;

/// Dynamic programming backend.
///
/// Memory is two bytes per unit of (gcd-reduced) capacity; `max_capacity`
/// caps the table size.
#[derive(Debug, Clone)]
pub struct DynamicProgrammingSolver {
    max_capacity: u64,
}

impl DynamicProgrammingSolver {
    /// Create a solver that refuses reduced capacities above `max_capacity`.
    #[must_use]
    pub const fn new(max_capacity: u64) -> Self {
        Self { max_capacity }
    }
}

impl Default for DynamicProgrammingSolver {
    fn default() -> Self {
        Self::new(20_000_000)
    }
}

impl Solver for DynamicProgrammingSolver {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    /// The gcd-reduced capacity must fit the table and the item count its
    /// index width.
    fn accepts(&self, problem: &KnapsackProblem) -> bool {
        let (reduced, _) = problem.reduced();
        reduced.capacity <= self.max_capacity && problem.num_vars() <= MAX_DP_ITEMS
    }

    fn solve(&self, problem: &KnapsackProblem, limits: &SolveLimits) -> Result<KnapsackSolution> {
        ensure_positive_weights(self.name(), problem)?;
        if !self.accepts(problem) {
            return Err(Error::Solver(format!(
                "dynamic: {} items with capacity {} exceed the table limit {}",
                problem.num_vars(),
                problem.capacity,
                self.max_capacity
            )));
        }

        if problem.weights.is_empty() {
            return Ok(KnapsackSolution {
                quantities: vec![],
                total: 0,
                bound: 0,
                status: AllocationStatus::Optimal,
                work: 0,
            });
        }

        let (reduced, factor) = problem.reduced();
        let capacity = usize::try_from(reduced.capacity)
            .map_err(|_| Error::Solver("dynamic: capacity exceeds address space".into()))?;

        let mut first_item = vec![UNREACHED; capacity + 1];
        let mut best = 0usize;
        let mut work = 0u64;
        let mut timed_out = false;

        'items: for (index, &weight) in reduced.weights.iter().enumerate() {
            let Ok(weight) = usize::try_from(weight) else {
                continue;
            };
            if weight > capacity {
                continue;
            }

            // `index < MAX_DP_ITEMS` is guaranteed by `accepts`.
            let tag = index as u16;
            for sum in weight..=capacity {
                let rest = sum - weight;
                if first_item[sum] == UNREACHED && (rest == 0 || first_item[rest] != UNREACHED) {
                    first_item[sum] = tag;
                    best = best.max(sum);
                }

                work += 1;
                if work & DEADLINE_CHECK_MASK == 0 && limits.expired() {
                    timed_out = true;
                    break 'items;
                }
            }

            let reached = best as u64 * factor;
            progress!(
                limits,
                solver = "dynamic",
                item = index,
                best = reached,
                cells = work,
                "Item pass complete"
            );

            if best == capacity {
                break;
            }
        }

        let quantities = reconstruct(&first_item, &reduced.weights, best);
        let total = best as u64 * factor;
        let upper = reduced.capacity * factor;

        let (status, bound) = if !timed_out || best == capacity {
            (AllocationStatus::Optimal, total)
        } else if limits.within_gap(upper, total) {
            (AllocationStatus::Optimal, upper)
        } else {
            (AllocationStatus::NotSolved, upper)
        };

        if timed_out {
            tracing::warn!(
                solver = "dynamic",
                elapsed_ms = limits.elapsed().as_millis() as u64,
                best = total,
                bound = upper,
                "Time limit reached"
            );
        }

        Ok(KnapsackSolution {
            quantities,
            total,
            bound,
            status,
            work,
        })
    }
}

/// Walk the first-item table back from `target` to zero.
fn reconstruct(first_item: &[u16], weights: &[u64], target: usize) -> Vec<u64> {
    let mut quantities = vec![0u64; weights.len()];
    let mut sum = target;
    while sum > 0 {
        let index = usize::from(first_item[sum]);
        quantities[index] += 1;
        // Reached sums only point at items whose weight fits the sum.
        sum -= weights[index] as usize;
    }
    quantities
}
