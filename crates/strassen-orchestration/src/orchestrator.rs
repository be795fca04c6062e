//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use strassen_core::{MatrixError, Multiplier};

use crate::interfaces::{MultiplicationResult, Operands};

/// Run every multiplier on the same operands.
///
/// Results are returned in the order of `multipliers`. With more than one
/// multiplier they run concurrently on the rayon pool.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    operands: &Operands,
) -> Vec<MultiplicationResult> {
    if multipliers.len() == 1 {
        return vec![run_one(multipliers[0].as_ref(), operands)];
    }

    multipliers
        .par_iter()
        .map(|m| run_one(m.as_ref(), operands))
        .collect()
}

fn run_one(m: &dyn Multiplier, operands: &Operands) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = m.multiply(&operands.a, &operands.b);
    let duration = start.elapsed();
    debug!(algorithm = m.name(), ?duration, ok = outcome.is_ok(), "multiplication finished");
    MultiplicationResult {
        algorithm: m.name().to_string(),
        outcome,
        duration,
    }
}

/// Check that every successful product is identical.
///
/// With no successful product at all, the first failure is returned.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), MatrixError> {
    let mut valid = results.iter().filter_map(|r| r.matrix().map(|m| (r, m)));

    let Some((first, expected)) = valid.next() else {
        return match results.iter().find_map(|r| r.outcome.as_ref().err()) {
            Some(e) => Err(e.clone()),
            None => Err(MatrixError::Config("no multiplications were run".into())),
        };
    };

    for (result, matrix) in valid {
        if matrix != expected {
            warn!(
                left = first.algorithm.as_str(),
                right = result.algorithm.as_str(),
                "products differ"
            );
            return Err(MatrixError::Mismatch);
        }
    }

    Ok(())
}
