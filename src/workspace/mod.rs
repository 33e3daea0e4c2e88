//! Project workspace preparation
//!
//! Working directories, the secrets file and the credentials check.
//! Every operation here is idempotent: re-running setup never fails or
//! duplicates work because an artifact already exists.

use std::path::PathBuf;

use crate::config::SetupConfig;
use crate::error::{Result, file_copy_failed};

/// Outcome of materializing the secrets file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOutcome {
    /// `.env` was created as a copy of the template
    Created,
    /// `.env` already existed and was left untouched
    AlreadyPresent,
    /// The template is missing; nothing was created
    TemplateMissing,
}

/// Create the configured working directories
///
/// `create_dir_all` is a no-op for directories that already exist.
pub fn ensure_working_dirs(config: &SetupConfig) -> Result<()> {
    for dir in config.working_dir_paths() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(())
}

/// Copy the secrets template to the secrets file if absent
///
/// An existing secrets file is never overwritten.
pub fn materialize_env(config: &SetupConfig) -> Result<EnvOutcome> {
    let env_path = config.env_path();
    if env_path.exists() {
        return Ok(EnvOutcome::AlreadyPresent);
    }

    let template_path = config.env_template_path();
    if !template_path.is_file() {
        return Ok(EnvOutcome::TemplateMissing);
    }

    std::fs::copy(&template_path, &env_path).map_err(|e| {
        file_copy_failed(
            template_path.display().to_string(),
            env_path.display().to_string(),
            e.to_string(),
        )
    })?;
    Ok(EnvOutcome::Created)
}

/// Whether the external credentials file is present
///
/// Existence-checked only; setup never creates it.
pub fn credentials_present(config: &SetupConfig) -> bool {
    config.credentials_path().is_file()
}

/// Working directories that do not exist yet (used by doctor)
pub fn missing_working_dirs(config: &SetupConfig) -> Vec<PathBuf> {
    config
        .working_dirs
        .iter()
        .zip(config.working_dir_paths())
        .filter(|(_, abs)| !abs.is_dir())
        .map(|(rel, _)| rel.clone())
        .collect()
}
