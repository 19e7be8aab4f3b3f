//! Randomised agreement between backends and exhaustive search.

use outlay::adapter::outbound::solver::{BranchAndBoundSolver, DynamicProgrammingSolver};
use outlay::domain::AllocationStatus;
use outlay::port::{KnapsackProblem, Solver};
use outlay::testkit::config::exact_limits;
use outlay::testkit::domain::{brute_force_best, problem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_problem(rng: &mut StdRng) -> KnapsackProblem {
    let n = rng.gen_range(1..=4);
    let weights: Vec<u64> = (0..n).map(|_| rng.gen_range(3..=60)).collect();
    let capacity = rng.gen_range(0..=200);
    problem(&weights, capacity)
}

fn check(solver: &dyn Solver, problem: &KnapsackProblem) -> u64 {
    let solution = solver.solve(problem, &exact_limits()).unwrap();

    assert_eq!(solution.status, AllocationStatus::Optimal, "{problem:?}");
    assert_eq!(solution.quantities.len(), problem.num_vars());
    assert_eq!(problem.total(&solution.quantities), Some(solution.total));
    assert!(solution.total <= problem.capacity);
    assert!(solution.bound >= solution.total);
    solution.total
}

#[test]
fn backends_match_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let dp = DynamicProgrammingSolver::default();
    let bb = BranchAndBoundSolver::new();

    for _ in 0..200 {
        let problem = random_problem(&mut rng);
        let expected = brute_force_best(&problem.weights, problem.capacity);

        assert_eq!(check(&dp, &problem), expected, "dynamic on {problem:?}");
        assert_eq!(check(&bb, &problem), expected, "branch_and_bound on {problem:?}");
    }
}

#[test]
fn backends_agree_on_cent_scale_catalogs() {
    let mut rng = StdRng::seed_from_u64(42);
    let dp = DynamicProgrammingSolver::default();
    let bb = BranchAndBoundSolver::new();

    for _ in 0..25 {
        let n = rng.gen_range(2..=4);
        let weights: Vec<u64> = (0..n).map(|_| rng.gen_range(10_000..=250_000)).collect();
        let capacity = rng.gen_range(100_000..=1_500_000);
        let problem = problem(&weights, capacity);

        assert_eq!(check(&dp, &problem), check(&bb, &problem), "{problem:?}");
    }
}

#[test]
fn solutions_are_deterministic() {
    let problem = problem(&[100_000, 150_000, 250_000], 500_000);
    let dp = DynamicProgrammingSolver::default();
    let bb = BranchAndBoundSolver::new();

    let first_dp = dp.solve(&problem, &exact_limits()).unwrap();
    let first_bb = bb.solve(&problem, &exact_limits()).unwrap();
    for _ in 0..3 {
        let dp_again = dp.solve(&problem, &exact_limits()).unwrap();
        let bb_again = bb.solve(&problem, &exact_limits()).unwrap();
        assert_eq!(dp_again.quantities, first_dp.quantities);
        assert_eq!(bb_again.quantities, first_bb.quantities);
    }
    assert_eq!(first_dp.total, 500_000);
    assert_eq!(first_bb.total, 500_000);
}
