//! File system errors

use super::VenvupError;

/// Creates a file-copy error
pub fn copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> VenvupError {
    VenvupError::FileCopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> VenvupError {
    VenvupError::IoError {
        message: message.into(),
    }
}
