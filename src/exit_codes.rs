//! Standard exit codes for the qrelease binary
//!
//! Release scripts branch on these, so the values are fixed.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Disk image descriptor failed validation
pub const EXIT_DESCRIPTOR_ERROR: i32 = 102;

/// Invalid command-line arguments (unknown stage, unknown platform)
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Serialization error while producing JSON output
pub const EXIT_SERIALIZATION_ERROR: i32 = 109;

/// Map a library error onto the exit code reported to the caller
pub fn for_error(err: &crate::ReleaseError) -> i32 {
    use crate::ReleaseError;

    match err {
        ReleaseError::InvalidDescriptor(_) => EXIT_DESCRIPTOR_ERROR,
        ReleaseError::UnknownStage(_) | ReleaseError::UnsupportedPlatform(_) => EXIT_INVALID_ARGS,
        ReleaseError::IoError(_) => EXIT_IO_ERROR,
        ReleaseError::JsonError(_) => EXIT_SERIALIZATION_ERROR,
        ReleaseError::Generic(_) => EXIT_ERROR,
    }
}
