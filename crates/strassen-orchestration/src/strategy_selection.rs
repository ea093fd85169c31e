//! Strategy selection logic.

use std::sync::Arc;

use strassen_core::registry::StrategyFactory;
use strassen_core::{Element, Multiplier, StrassenError};

/// Get strategies to run based on the `--algo` selection.
pub fn get_strategies_to_run<T: Element>(
    algo: &str,
    factory: &dyn StrategyFactory<T>,
) -> Result<Vec<Arc<dyn Multiplier<T>>>, StrassenError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
