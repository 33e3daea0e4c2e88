//! Interpreter errors

use super::VenvupError;

/// Creates a version-too-old error showing required and found versions
pub fn too_old(required: impl Into<String>, found: impl Into<String>) -> VenvupError {
    VenvupError::PythonTooOld {
        required: required.into(),
        found: found.into(),
    }
}

/// Creates a version-probe error
pub fn probe_failed(reason: impl Into<String>) -> VenvupError {
    VenvupError::PythonProbeFailed {
        reason: reason.into(),
    }
}
