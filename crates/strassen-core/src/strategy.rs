//! Multiplication strategy trait and implementations.
//!
//! `Multiplier` is the narrow interface the orchestration layer runs.
//! Strategies are the naive triple loop, sequential Strassen, and Strassen
//! with fork-join over the seven sub-products.

use crate::element::Element;
use crate::error::StrassenError;
use crate::matrix::Matrix;
use crate::naive::naive_multiply;
use crate::options::Options;
use crate::strassen::strassen_with_options;

/// Narrow interface for matrix multiplication.
pub trait Multiplier<T: Element>: Send + Sync {
    /// Multiply `a * b`.
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError>;

    /// Get the name of this multiplication strategy.
    fn name(&self) -> &str;
}

/// Textbook triple loop.
pub struct NaiveStrategy;

impl NaiveStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Multiplier<T> for NaiveStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
        naive_multiply(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}

/// Sequential Strassen.
pub struct StrassenStrategy {
    opts: Options,
}

impl StrassenStrategy {
    #[must_use]
    pub fn new(opts: &Options) -> Self {
        Self {
            opts: opts.clone().with_parallel(false),
        }
    }
}

impl Default for StrassenStrategy {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl<T: Element> Multiplier<T> for StrassenStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
        strassen_with_options(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Strassen that forks the seven sub-products onto the rayon pool once the
/// sub-problem side reaches `parallel_threshold`.
pub struct ParallelStrassenStrategy {
    opts: Options,
}

impl ParallelStrassenStrategy {
    #[must_use]
    pub fn new(opts: &Options) -> Self {
        Self {
            opts: opts.clone().with_parallel(true),
        }
    }

    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.opts.parallel_threshold
    }
}

impl<T: Element> Multiplier<T> for ParallelStrassenStrategy {
    fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, StrassenError> {
        strassen_with_options(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "ParallelStrassen"
    }
}
