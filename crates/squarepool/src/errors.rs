//! Error handling and exit codes.

use squarepool_core::constants::exit_codes;
use squarepool_core::SquareError;

/// Map a run error to its exit code.
pub fn handle_error(err: &SquareError) -> i32 {
    match err {
        SquareError::Overflow(_) | SquareError::Pool(_) => exit_codes::ERROR_GENERIC,
        SquareError::Config(_) => exit_codes::ERROR_CONFIG,
        SquareError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SquareError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
