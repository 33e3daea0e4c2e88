//! Virtual environment management
//!
//! Creation, "activation" and pip invocations. Activation here means
//! resolving the venv's own interpreter and using it for every later
//! child process; no shell state is mutated.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, VenvupError, dependency_install_failed, venv_create_failed};

/// A virtual environment rooted at a directory
#[derive(Debug, Clone)]
pub struct Venv {
    root: PathBuf,
}

impl Venv {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the environment directory exists
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Path to the environment's own interpreter
    #[cfg(unix)]
    pub fn python_path(&self) -> PathBuf {
        self.root.join("bin").join("python")
    }

    /// Path to the environment's own interpreter
    #[cfg(windows)]
    pub fn python_path(&self) -> PathBuf {
        self.root.join("Scripts").join("python.exe")
    }

    /// Create the environment with the given base interpreter
    pub fn create(&self, python: &Path) -> Result<()> {
        let output = Command::new(python)
            .arg("-m")
            .arg("venv")
            .arg(&self.root)
            .output()
            .map_err(|e| venv_create_failed(e.to_string()))?;

        if !output.status.success() {
            return Err(venv_create_failed(child_failure_detail(&output)));
        }
        Ok(())
    }

    /// Create the environment if absent
    ///
    /// Returns `true` when a new environment was created, `false` on
    /// the idempotent skip.
    pub fn ensure(&self, python: &Path) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.create(python)?;
        Ok(true)
    }

    /// Delete the environment directory if present
    pub fn remove(&self) -> Result<()> {
        if self.exists() {
            std::fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }

    /// Resolve the environment's interpreter for later steps
    ///
    /// Fails when the venv directory exists but its interpreter is
    /// missing or does not run (a broken or half-created environment).
    pub fn activate(&self) -> Result<PathBuf> {
        let python = self.python_path();
        if !python.is_file() {
            return Err(VenvupError::ActivationFailed);
        }
        let status = Command::new(&python)
            .arg("--version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => Ok(python),
            _ => Err(VenvupError::ActivationFailed),
        }
    }
}

/// Upgrade pip inside the environment
///
/// Soft step: a stale pip still installs the manifest, so failure is
/// reported as a warning detail rather than aborting setup.
pub fn upgrade_pip(venv_python: &Path) -> std::result::Result<(), String> {
    let output = Command::new(venv_python)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .output()
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        return Err(child_failure_detail(&output));
    }
    Ok(())
}

/// Install the dependency manifest into the environment
///
/// Fatal on failure: a half-installed environment breaks the app in
/// harder-to-diagnose ways later.
pub fn install_requirements(venv_python: &Path, manifest: &Path) -> Result<()> {
    let output = Command::new(venv_python)
        .arg("-m")
        .arg("pip")
        .arg("install")
        .arg("-r")
        .arg(manifest)
        .output()
        .map_err(|e| dependency_install_failed(e.to_string()))?;

    if !output.status.success() {
        return Err(dependency_install_failed(child_failure_detail(&output)));
    }
    Ok(())
}

/// Fold a failed child's stderr into a one-line detail
fn child_failure_detail(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let last_line = stderr.lines().rev().find(|l| !l.trim().is_empty());
    match last_line {
        Some(line) => line.trim().to_string(),
        None => format!("exited with {}", output.status),
    }
}
