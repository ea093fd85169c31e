//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::StrassenError;

/// Map a multiplication error to its exit code.
pub fn handle_error(err: &StrassenError) -> i32 {
    match err {
        StrassenError::Shape(_) => exit_codes::ERROR_SHAPE,
        StrassenError::DimensionMismatch { .. } => exit_codes::ERROR_DIMENSION,
        StrassenError::Config(_) => exit_codes::ERROR_CONFIG,
        StrassenError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error; non-multiplication failures (I/O,
/// JSON) are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StrassenError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
