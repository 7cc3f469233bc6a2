//! Error handling and exit codes.

use crosscheck_core::constants::exit_codes;
use crosscheck_core::contract::HarnessError;

/// Map a harness error to its exit code.
#[must_use]
pub fn handle_error(err: &HarnessError) -> i32 {
    match err {
        HarnessError::Config(_) => exit_codes::ERROR_CONFIG,
        HarnessError::Io(_) | HarnessError::Arity { .. } => exit_codes::ERROR_GENERIC,
        HarnessError::Mismatch { .. } => exit_codes::SUCCESS,
    }
}

/// Exit code for an error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<HarnessError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
