//! Error handling and exit codes.

use pidigits_core::constants::exit_codes;
use pidigits_core::error::PiError;

/// Map a library error to its exit code.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::InvalidArgument { .. } => exit_codes::ERROR_INVALID_ARGUMENT,
        PiError::Interrupted(_) => exit_codes::ERROR_INTERRUPTED,
        e if e.is_internal() => exit_codes::ERROR_INTERNAL,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PiError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
