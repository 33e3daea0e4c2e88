//! Virtual environment and pip errors

use super::VenvupError;

/// Creates a venv-creation error
pub fn create_failed(reason: impl Into<String>) -> VenvupError {
    VenvupError::VenvCreateFailed {
        reason: reason.into(),
    }
}

/// Creates a dependency-install error
pub fn install_failed(reason: impl Into<String>) -> VenvupError {
    VenvupError::DependencyInstallFailed {
        reason: reason.into(),
    }
}
