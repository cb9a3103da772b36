//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{HashError, HashErrorKind};

/// Process exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code for any failed run
pub const EXIT_FAILURE: i32 = 1;

/// Map domain errors to the line written to stderr.
pub fn map_error(e: &HashError) -> String {
    match e.kind() {
        HashErrorKind::InvalidArgument => format!("Invalid argument: {}", e),
        _ => format!("Error: {}", e),
    }
}

/// Exit code for a finished run; every error kind is a failure.
pub fn exit_code(result: &Result<String, HashError>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
