//! Exit codes for the rendercheck CLI.
//!
//! Following Unix conventions for exit codes.

use crate::runner::RunnerError;

/// Exit code constants.
pub mod codes {
    /// Every attempted variant passed.
    pub const SUCCESS: i32 = 0;
    /// At least one variant failed.
    pub const CONFORMANCE_FAILURE: i32 = 1;
    /// Invalid arguments.
    pub const INVALID_ARGS: i32 = 2;
    /// Suite fixtures could not be prepared.
    pub const SUITE_ERROR: i32 = 3;
}

/// Map a RunnerError to an exit code.
pub fn exit_code(error: &RunnerError) -> i32 {
    match error {
        RunnerError::InvalidArgument(_) => codes::INVALID_ARGS,
        RunnerError::Suite(_) => codes::SUITE_ERROR,
        RunnerError::ConformanceFailed { .. } => codes::CONFORMANCE_FAILURE,
    }
}
