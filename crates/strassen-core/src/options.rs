//! Multiplication options and configuration.

use crate::constants::{
    BASE_CASE_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD, DEFAULT_TOLERANCE,
};

/// Options for the Strassen engine and result comparison.
#[derive(Debug, Clone)]
pub struct Options {
    /// Side length at or below which the engine uses the naive kernel
    /// instead of recursing. The 2x2 base case always uses the direct formula.
    pub strassen_threshold: usize,
    /// Side length from which the seven sub-products run on the rayon pool.
    pub parallel_threshold: usize,
    /// Whether fork-join parallelism is enabled at all.
    pub parallel: bool,
    /// Absolute tolerance when comparing products across strategies.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            parallel: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero or invalid.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_threshold < BASE_CASE_SIZE {
            self.strassen_threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }

    /// Copy of these options with fork-join enabled.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether a sub-problem of the given side should fork.
    #[inline]
    #[must_use]
    pub fn forks_at(&self, side: usize) -> bool {
        self.parallel && side >= self.parallel_threshold
    }
}
