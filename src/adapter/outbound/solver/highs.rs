//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This backend hands the allocation to it as a one-constraint integer
//! program. It is useful as an independent check on the built-in backends.

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};

use super::common::ensure_positive_weights;
use crate::domain::AllocationStatus;
use crate::error::{Error, Result};
use crate::port::{KnapsackProblem, KnapsackSolution, SolveLimits, Solver};

/// HiGHS-based MIP solver.
#[derive(Debug, Default, Clone)]
pub struct HighsSolver;

impl HighsSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HighsSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &KnapsackProblem, limits: &SolveLimits) -> Result<KnapsackSolution> {
        ensure_positive_weights(self.name(), problem)?;

        let n = problem.num_vars();
        if n == 0 {
            return Ok(KnapsackSolution {
                quantities: vec![],
                total: 0,
                bound: 0,
                status: AllocationStatus::Optimal,
                work: 0,
            });
        }

        let mut vars = variables!();
        let quantities: Vec<_> = problem
            .weights
            .iter()
            .map(|&w| {
                let most = (problem.capacity / w) as f64;
                vars.add(variable().integer().min(0).max(most))
            })
            .collect();

        let spend: Expression = quantities
            .iter()
            .zip(&problem.weights)
            .map(|(q, &w)| w as f64 * *q)
            .sum();

        let model = vars
            .maximise(spend.clone())
            .using(highs)
            .set_verbose(limits.verbose)
            .set_time_limit(limits.time_limit.as_secs_f64())
            .set_option("mip_rel_gap", limits.relative_gap)
            .with(constraint!(spend <= problem.capacity as f64));

        match model.solve() {
            Ok(solution) => {
                let values: Vec<u64> = quantities
                    .iter()
                    .map(|q| solution.value(*q).round().max(0.0) as u64)
                    .collect();

                let total = problem
                    .total(&values)
                    .filter(|&total| total <= problem.capacity)
                    .ok_or_else(|| {
                        Error::Solver("highs: rounded solution exceeds the budget".into())
                    })?;

                let status = if limits.expired() {
                    AllocationStatus::NotSolved
                } else {
                    AllocationStatus::Optimal
                };

                Ok(KnapsackSolution {
                    quantities: values,
                    total,
                    bound: problem.upper_bound(),
                    status,
                    work: 0,
                })
            }
            Err(ResolutionError::Unbounded) => Ok(KnapsackSolution {
                quantities: vec![0; n],
                total: 0,
                bound: problem.upper_bound(),
                status: AllocationStatus::Unbounded,
                work: 0,
            }),
            Err(ResolutionError::Infeasible) => Ok(KnapsackSolution {
                quantities: vec![0; n],
                total: 0,
                bound: 0,
                status: AllocationStatus::Infeasible,
                work: 0,
            }),
            Err(err) => Err(Error::Solver(format!("highs: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_solver_name() {
        assert_eq!(HighsSolver::new().name(), "highs");
    }

    #[test]
    fn test_exact_fill() {
        let limits = SolveLimits::new(0.0, Duration::from_secs(10), false);
        let solution = HighsSolver::new()
            .solve(&KnapsackProblem::new(vec![6, 4], 8), &limits)
            .unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.total, 8);
    }

    #[test]
    fn test_empty_problem() {
        let solution = HighsSolver::new()
            .solve(&KnapsackProblem::new(vec![], 8), &SolveLimits::default())
            .unwrap();

        assert!(solution.is_optimal());
        assert!(solution.quantities.is_empty());
    }
}
