//! Multiplier selection logic.

use std::sync::Arc;

use strassen_core::{MatrixError, Multiplier, MultiplierFactory};

/// Get multipliers to run based on algorithm selection.
///
/// `"all"` runs Strassen first so its result is presented before the
/// reference product.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
