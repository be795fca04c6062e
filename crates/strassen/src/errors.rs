//! Error handling and exit codes.

use strassen_core::{exit_codes, MatrixError};

/// Map a multiplication error to its exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Overflow(_) => exit_codes::ERROR_OVERFLOW,
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::InvalidDimension(_) | MatrixError::DimensionMismatch { .. } => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    // Source (file/parse) errors and anything else are generic failures.
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
