//! Helpers shared by the search backends.

use crate::error::Error;
use crate::port::KnapsackProblem;

/// Solver progress event: `info` when verbose logging is on, `trace` otherwise.
macro_rules! progress {
    ($limits:expr, $($arg:tt)+) => {
        if $limits.verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::trace!($($arg)+);
        }
    };
}
pub(crate) use progress;

/// Zero weights admit unbounded quantities and must be filtered upstream.
pub(crate) fn ensure_positive_weights(solver: &str, problem: &KnapsackProblem) -> Result<(), Error> {
    match problem.weights.iter().position(|&w| w == 0) {
        Some(index) => Err(Error::Solver(format!(
            "{solver}: item {index} has zero weight"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_weight_is_rejected_with_its_index() {
        let err = ensure_positive_weights("dynamic", &KnapsackProblem::new(vec![3, 0], 10))
            .unwrap_err();
        assert_eq!(err.to_string(), "solver error: dynamic: item 1 has zero weight");
        assert!(ensure_positive_weights("dynamic", &KnapsackProblem::new(vec![3], 10)).is_ok());
    }
}
