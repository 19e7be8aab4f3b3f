//! Depth-first branch-and-bound for capacities too large to tabulate.
//!
//! Items are visited in descending weight order (ties keep catalog order)
//! and larger quantities are tried first, which finds good incumbents early.
//! A node's bound is `used + floor(remaining / g) * g`, where `g` is the gcd
//! of the weights still to be decided: no completion can land between two
//! multiples of `g`.
//!
//! A subtree is pruned once its bound is within the relative gap of the
//! incumbent, and the search stops as soon as the incumbent is within the
//! gap of the root bound. With a zero gap the search is exact.

use super::common::{ensure_positive_weights, progress};
use crate::domain::AllocationStatus;
use crate::error::Result;
use crate::port::outbound::solver::gcd;
use crate::port::{KnapsackProblem, KnapsackSolution, SolveLimits, Solver};

/// Deadline is polled once per this many nodes.
const NODE_CHECK_MASK: u64 = (1 << 10) - 1;

/// Branch-and-bound backend.
#[derive(Debug, Default, Clone)]
pub struct BranchAndBoundSolver;

impl BranchAndBoundSolver {
    /// Create a new branch-and-bound solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Solver for BranchAndBoundSolver {
    fn name(&self) -> &'static str {
        "branch_and_bound"
    }

    fn solve(&self, problem: &KnapsackProblem, limits: &SolveLimits) -> Result<KnapsackSolution> {
        ensure_positive_weights(self.name(), problem)?;

        let (reduced, factor) = problem.reduced();
        let mut order: Vec<usize> = (0..reduced.num_vars()).collect();
        order.sort_by(|&a, &b| reduced.weights[b].cmp(&reduced.weights[a]));
        let weights: Vec<u64> = order.iter().map(|&i| reduced.weights[i]).collect();

        let mut search = Search::new(&weights, reduced.capacity, limits);
        search.run();

        let mut quantities = vec![0u64; order.len()];
        for (sorted, &original) in order.iter().enumerate() {
            quantities[original] = search.best_quantities[sorted];
        }

        let (status, bound) = match search.state {
            State::Running => (
                AllocationStatus::Optimal,
                search.best.max(search.open_bound),
            ),
            State::GapClosed => (AllocationStatus::Optimal, search.root_bound),
            State::TimedOut => {
                tracing::warn!(
                    solver = "branch_and_bound",
                    elapsed_ms = limits.elapsed().as_millis() as u64,
                    nodes = search.nodes,
                    best = search.best * factor,
                    bound = search.root_bound * factor,
                    "Time limit reached"
                );
                (AllocationStatus::NotSolved, search.root_bound)
            }
        };

        Ok(KnapsackSolution {
            quantities,
            total: search.best * factor,
            bound: bound * factor,
            status,
            work: search.nodes,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    GapClosed,
    TimedOut,
}

struct Search<'a> {
    weights: &'a [u64],
    capacity: u64,
    limits: &'a SolveLimits,
    /// gcd of `weights[k..]`; zero past the end.
    suffix_gcd: Vec<u64>,
    /// Smallest of `weights[k..]`; `u64::MAX` past the end.
    suffix_min: Vec<u64>,
    root_bound: u64,
    current: Vec<u64>,
    best: u64,
    best_quantities: Vec<u64>,
    /// Largest bound among pruned subtrees.
    open_bound: u64,
    nodes: u64,
    state: State,
}

impl<'a> Search<'a> {
    fn new(weights: &'a [u64], capacity: u64, limits: &'a SolveLimits) -> Self {
        let n = weights.len();
        let mut suffix_gcd = vec![0u64; n + 1];
        let mut suffix_min = vec![u64::MAX; n + 1];
        for k in (0..n).rev() {
            suffix_gcd[k] = gcd(weights[k], suffix_gcd[k + 1]);
            suffix_min[k] = weights[k].min(suffix_min[k + 1]);
        }
        let root_bound = match suffix_gcd[0] {
            0 => 0,
            g => capacity / g * g,
        };

        Self {
            weights,
            capacity,
            limits,
            suffix_gcd,
            suffix_min,
            root_bound,
            current: vec![0; n],
            best: 0,
            best_quantities: vec![0; n],
            open_bound: 0,
            nodes: 0,
            state: State::Running,
        }
    }

    fn run(&mut self) {
        self.greedy();
        if self.limits.within_gap(self.root_bound, self.best) {
            self.state = State::GapClosed;
            return;
        }
        self.explore();
    }

    /// Largest-first greedy fill as the starting incumbent.
    fn greedy(&mut self) {
        let mut remaining = self.capacity;
        for (k, &weight) in self.weights.iter().enumerate() {
            let quantity = remaining / weight;
            self.best_quantities[k] = quantity;
            remaining -= quantity * weight;
        }
        self.best = self.capacity - remaining;
    }

    /// Depth-first search over an explicit frame stack, so catalog size
    /// never bounds the call depth.
    fn explore(&mut self) {
        let mut stack: Vec<Frame> = self.enter(0, 0).into_iter().collect();

        while let Some(frame) = stack.last_mut() {
            if self.state != State::Running {
                return;
            }

            let depth = frame.depth;
            let Some(quantity) = frame.next else {
                self.current[depth] = 0;
                stack.pop();
                continue;
            };

            frame.next = match quantity {
                0 => None,
                _ if frame.only_max => None,
                q => Some(q - 1),
            };
            let used = frame.used + quantity * self.weights[depth];
            self.current[depth] = quantity;

            if let Some(child) = self.enter(depth + 1, used) {
                stack.push(child);
            }
        }
    }

    /// Visit the node at `depth` with `used` spent so far. Returns a frame
    /// when the node has children left to branch on.
    fn enter(&mut self, depth: usize, used: u64) -> Option<Frame> {
        self.nodes += 1;
        if self.nodes & NODE_CHECK_MASK == 0 && self.limits.expired() {
            self.state = State::TimedOut;
        }
        if self.state != State::Running {
            return None;
        }

        if used > self.best {
            self.best = used;
            self.best_quantities[..depth].copy_from_slice(&self.current[..depth]);
            self.best_quantities[depth..].fill(0);
            progress!(
                self.limits,
                solver = "branch_and_bound",
                best = used,
                nodes = self.nodes,
                "New incumbent"
            );
            if self.limits.within_gap(self.root_bound, self.best) {
                self.state = State::GapClosed;
                return None;
            }
        }

        let remaining = self.capacity - used;
        if depth == self.weights.len() || remaining < self.suffix_min[depth] {
            return None;
        }

        let g = self.suffix_gcd[depth];
        let bound = used + remaining / g * g;
        if self.limits.within_gap(bound, self.best) {
            self.open_bound = self.open_bound.max(bound);
            return None;
        }

        Some(Frame {
            depth,
            used,
            next: Some(remaining / self.weights[depth]),
            // Last item: the largest quantity dominates every smaller one.
            only_max: depth + 1 == self.weights.len(),
        })
    }
}

/// Branching state of one open node.
struct Frame {
    depth: usize,
    used: u64,
    /// Next quantity to try; counts down to zero.
    next: Option<u64>,
    only_max: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn solve(weights: Vec<u64>, capacity: u64) -> KnapsackSolution {
        BranchAndBoundSolver::new()
            .solve(
                &KnapsackProblem::new(weights, capacity),
                &SolveLimits::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_solver_name() {
        assert_eq!(BranchAndBoundSolver::new().name(), "branch_and_bound");
    }

    #[test]
    fn beats_the_greedy_incumbent() {
        let solution = solve(vec![6, 4], 8);

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 8);
        assert_eq!(solution.quantities, vec![0, 2]);
    }

    #[test]
    fn exact_fill_with_mixed_items() {
        let solution = solve(vec![100_000, 150_000], 500_000);

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 500_000);
        assert_eq!(solution.quantities, vec![2, 2]);
    }

    #[test]
    fn proves_unreachable_capacity() {
        // Only even sums are reachable; best is 18 of 19.
        let solution = solve(vec![4, 6], 19);

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 18);
        assert_eq!(solution.bound, 18);
    }

    #[test]
    fn exhaustive_search_reports_tight_bound() {
        let solution = solve(vec![7, 9], 20);

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 18);
        assert_eq!(solution.bound, 18);
        assert_eq!(solution.quantities, vec![0, 2]);
    }

    #[test]
    fn gap_tolerance_accepts_the_greedy_fill() {
        let limits = SolveLimits::new(0.05, Duration::from_secs(5), false);
        // Greedy stops at 2 x 45 = 90, more than 5% short of 100.
        let solution = BranchAndBoundSolver::new()
            .solve(&KnapsackProblem::new(vec![45, 32], 100), &limits)
            .unwrap();

        assert!(solution.is_optimal());
        assert!(solution.total >= 95, "got {}", solution.total);
    }

    #[test]
    fn large_capacity_is_solved_quickly() {
        let limits = SolveLimits::new(0.0, Duration::from_secs(10), false);
        let problem = KnapsackProblem::new(vec![1_234_567, 7_654_321, 999_983], 5_000_000_000_000);
        let solution = BranchAndBoundSolver::new().solve(&problem, &limits).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 5_000_000_000_000);
        assert_eq!(problem.total(&solution.quantities), Some(solution.total));
    }

    #[test]
    fn zero_capacity_and_oversized_items() {
        assert_eq!(solve(vec![3], 0).quantities, vec![0]);

        let solution = solve(vec![1_000], 999);
        assert!(solution.is_optimal());
        assert_eq!(solution.total, 0);
    }

    #[test]
    fn empty_problem_is_trivially_optimal() {
        let solution = solve(vec![], 100);
        assert!(solution.is_optimal());
        assert!(solution.quantities.is_empty());
    }

    #[test]
    fn catalog_deeper_than_any_call_stack() {
        // No two items fit together, so the best buy is one unit of the
        // heaviest item and every level is branched on.
        let weights: Vec<u64> = (600_001..=670_000).collect();
        let solution = solve(weights.clone(), 1_000_000);

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 670_000);
        assert_eq!(solution.quantities.iter().sum::<u64>(), 1);
        assert_eq!(solution.quantities[weights.len() - 1], 1);
    }

    #[test]
    fn expired_deadline_reports_not_solved() {
        let limits = SolveLimits::new(0.0, Duration::ZERO, false);
        let problem = KnapsackProblem::new(
            vec![1_000_003, 999_983, 1_000_033, 999_979, 1_000_037],
            7_777_777_777,
        );
        let solution = BranchAndBoundSolver::new().solve(&problem, &limits).unwrap();

        assert_eq!(solution.status, AllocationStatus::NotSolved);
        assert!(solution.total <= problem.capacity);
        assert!(solution.total > 0);
        assert!(solution.bound >= solution.total);
        assert_eq!(problem.total(&solution.quantities), Some(solution.total));
    }
}
