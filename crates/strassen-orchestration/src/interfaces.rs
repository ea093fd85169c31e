//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Dimensions, Element, Matrix, StrassenError};

/// Trait for presenting results to the user.
pub trait ResultPresenter<T: Element>: Send + Sync {
    /// Present a product.
    fn present_result(
        &self,
        algorithm: &str,
        left: Dimensions,
        right: Dimensions,
        product: &Matrix<T>,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several strategies.
    fn present_comparison(&self, results: &[CalculationResult<T>]);

    /// Present a strategy run that failed.
    fn present_error(&self, algorithm: &str, error: &StrassenError);
}

/// Result of a single strategy run.
#[derive(Debug, Clone)]
pub struct CalculationResult<T> {
    /// Strategy name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix<T>, StrassenError>,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl<T> CalculationResult<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The product, if the run succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Matrix<T>> {
        self.outcome.as_ref().ok()
    }
}
