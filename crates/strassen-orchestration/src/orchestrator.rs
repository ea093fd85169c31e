//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use strassen_core::{Element, Matrix, Multiplier, StrassenError};

use crate::interfaces::CalculationResult;

fn run_one<T: Element>(
    strat: &Arc<dyn Multiplier<T>>,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> CalculationResult<T> {
    let start = Instant::now();
    let outcome = strat.multiply(a, b);
    let duration = start.elapsed();
    match &outcome {
        Ok(_) => info!(algorithm = strat.name(), ?duration, "multiplication finished"),
        Err(e) => warn!(algorithm = strat.name(), error = %e, "multiplication failed"),
    }
    CalculationResult {
        algorithm: strat.name().to_string(),
        outcome,
        duration,
    }
}

/// Multiply `a * b` with every given strategy.
///
/// A single strategy runs on the calling thread; several run concurrently on
/// the rayon pool. Results keep the order of `strategies`.
pub fn execute_multiplications<T: Element>(
    strategies: &[Arc<dyn Multiplier<T>>],
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Vec<CalculationResult<T>> {
    if let [strat] = strategies {
        return vec![run_one(strat, a, b)];
    }

    strategies
        .par_iter()
        .map(|strat| run_one(strat, a, b))
        .collect()
}

/// Check that all successful products agree within `tolerance`.
///
/// # Errors
///
/// The first run's error if no run succeeded, [`StrassenError::Mismatch`] if
/// two successful products differ.
pub fn analyze_comparison_results<T: Element>(
    results: &[CalculationResult<T>],
    tolerance: f64,
) -> Result<(), StrassenError> {
    let mut valid = results.iter().filter_map(|r| r.product().map(|p| (r, p)));

    let Some((first, reference)) = valid.next() else {
        return Err(match results.first().map(|r| &r.outcome) {
            Some(Err(e)) => e.clone(),
            _ => StrassenError::Config("no strategy was run".into()),
        });
    };

    for (result, product) in valid {
        if !product.approx_eq(reference, tolerance) {
            warn!(
                reference = %first.algorithm,
                other = %result.algorithm,
                max_distance = ?product.max_distance(reference),
                "products disagree"
            );
            return Err(StrassenError::Mismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use strassen_core::strategy::{NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy};
    use strassen_core::{Dimensions, Options};

    fn operands() -> (Matrix<f64>, Matrix<f64>) {
        let a = Matrix::from_fn(5, 3, |r, c| (r + 2 * c) as f64).unwrap();
        let b = Matrix::from_fn(3, 7, |r, c| (r as f64) - (c as f64) / 2.0).unwrap();
        (a, b)
    }

    fn result(name: &str, rows: &[Vec<f64>]) -> CalculationResult<f64> {
        CalculationResult {
            algorithm: name.into(),
            outcome: Matrix::from_rows(rows).map_err(StrassenError::from),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_strategy() {
        let (a, b) = operands();
        let strat: Arc<dyn Multiplier<f64>> = Arc::new(StrassenStrategy::default());
        let results = execute_multiplications(&[strat], &a, &b);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "Strassen");
        assert_eq!(
            results[0].product().unwrap().dimensions(),
            Dimensions::new(5, 7)
        );
    }

    #[test]
    fn execute_all_strategies_agree() {
        let (a, b) = operands();
        let opts = Options::default();
        let strategies: Vec<Arc<dyn Multiplier<f64>>> = vec![
            Arc::new(NaiveStrategy::new()),
            Arc::new(StrassenStrategy::new(&opts)),
            Arc::new(ParallelStrassenStrategy::new(&opts)),
        ];
        let results = execute_multiplications(&strategies, &a, &b);
        let names: Vec<&str> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["Naive", "Strassen", "ParallelStrassen"]);
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn execute_reports_mismatch_error() {
        let a = Matrix::<f64>::zeros(2, 3).unwrap();
        let strat: Arc<dyn Multiplier<f64>> = Arc::new(NaiveStrategy::new());
        let results = execute_multiplications(&[strat], &a, &a);
        assert!(matches!(
            results[0].outcome,
            Err(StrassenError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(StrassenError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("A", &[vec![1.0, 2.0]]),
            result("B", &[vec![1.0 + 1e-12, 2.0]]),
        ];
        assert!(analyze_comparison_results(&results, 1e-9).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![result("A", &[vec![1.0, 2.0]]), result("B", &[vec![1.0, 2.5]])];
        assert_eq!(
            analyze_comparison_results(&results, 1e-9),
            Err(StrassenError::Mismatch)
        );
    }

    #[test]
    fn analyze_skips_failed_runs() {
        let mut results = vec![result("A", &[vec![3.0]]), result("B", &[vec![3.0]])];
        results.push(CalculationResult {
            algorithm: "C".into(),
            outcome: Err(StrassenError::Config("boom".into())),
            duration: Duration::ZERO,
        });
        assert!(analyze_comparison_results(&results, 0.0).is_ok());
    }

    #[test]
    fn analyze_empty() {
        let results: Vec<CalculationResult<f64>> = Vec::new();
        assert!(matches!(
            analyze_comparison_results(&results, 1e-9),
            Err(StrassenError::Config(_))
        ));
    }
}
