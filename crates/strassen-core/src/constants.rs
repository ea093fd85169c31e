//! Constants for engine thresholds and process exit codes.

/// Side length at which the recursion bottoms out with the direct 2x2 formula.
pub const BASE_CASE_SIZE: usize = 2;

/// Default side length at or below which the engine switches to the naive
/// kernel. Equal to [`BASE_CASE_SIZE`], i.e. pure Strassen all the way down.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = BASE_CASE_SIZE;

/// Default side length from which the seven sub-products are forked onto
/// the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 128;

/// Default absolute tolerance when comparing floating-point products.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Number of scalar multiplications per recursion level (naive block
/// multiplication needs 8).
pub const PRODUCTS_PER_LEVEL: u64 = 7;

/// Exit codes for the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, malformed JSON).
    pub const ERROR_GENERIC: i32 = 1;
    /// An operand is empty, ragged or otherwise malformed.
    pub const ERROR_SHAPE: i32 = 2;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Inner dimensions of the operands are incompatible.
    pub const ERROR_DIMENSION: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_base_case() {
        assert_eq!(DEFAULT_STRASSEN_THRESHOLD, BASE_CASE_SIZE);
        assert!(DEFAULT_PARALLEL_THRESHOLD.is_power_of_two());
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_SHAPE,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_DIMENSION,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
