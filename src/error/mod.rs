//! Error types and handling for Venvup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`python`]: Interpreter discovery and version errors
//! - [`venv`]: Virtual environment and pip errors
//! - [`fs`]: File system and configuration errors

// Declare submodules
pub mod fs;
pub mod python;
pub mod venv;

// Re-export convenience constructors from submodules
pub use fs::{copy_failed as file_copy_failed, io_error};
pub use python::{probe_failed as python_probe_failed, too_old as python_too_old};
pub use venv::{create_failed as venv_create_failed, install_failed as dependency_install_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Venvup operations
///
/// The `Display` form of every fatal variant is the exact line printed
/// to the user after the `[ERROR]` marker.
#[derive(Error, Diagnostic, Debug)]
pub enum VenvupError {
    // Interpreter errors
    #[error("Python 3 not found. Please install Python 3.7 or higher.")]
    #[diagnostic(
        code(venvup::python::not_found),
        help("Install Python 3.7+ and make sure python3 is on your PATH")
    )]
    PythonNotFound,

    #[error("Python {required}+ required. Found Python {found}")]
    #[diagnostic(
        code(venvup::python::too_old),
        help("Upgrade your Python installation or point PATH at a newer interpreter")
    )]
    PythonTooOld { required: String, found: String },

    #[error("Failed to query Python version: {reason}")]
    #[diagnostic(code(venvup::python::probe_failed))]
    PythonProbeFailed { reason: String },

    // Virtual environment errors
    #[error("Failed to create virtual environment: {reason}")]
    #[diagnostic(
        code(venvup::venv::create_failed),
        help("Check that the venv module is available (python3 -m venv)")
    )]
    VenvCreateFailed { reason: String },

    #[error("Failed to activate virtual environment")]
    #[diagnostic(
        code(venvup::venv::activation_failed),
        help("The venv directory looks broken. Re-run setup with --force to recreate it")
    )]
    ActivationFailed,

    #[error("Failed to install dependencies: {reason}")]
    #[diagnostic(
        code(venvup::pip::install_failed),
        help("Check requirements.txt and your network connection, then re-run setup")
    )]
    DependencyInstallFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(venvup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(venvup::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(venvup::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(venvup::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for VenvupError {
    fn from(err: std::io::Error) -> Self {
        VenvupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for VenvupError {
    fn from(err: serde_yaml::Error) -> Self {
        VenvupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VenvupError>;
