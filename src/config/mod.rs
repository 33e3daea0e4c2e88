//! Setup configuration
//!
//! Every bootstrap step receives an explicit [`SetupConfig`] instead of
//! relying on ambient process state (current directory, active
//! interpreter). Defaults match the agent app's layout; an optional
//! `venvup.yaml` at the project root overrides any of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VenvupError};

/// Optional configuration file name, looked up at the project root
pub const CONFIG_FILE: &str = "venvup.yaml";

/// Paths and names the bootstrap sequence operates on
///
/// All paths are relative to `project_root`; use the `*_path()`
/// accessors to get absolute paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SetupConfig {
    /// Project root the relative paths below resolve against
    #[serde(skip)]
    pub project_root: PathBuf,

    /// Virtual environment directory
    pub venv_dir: PathBuf,

    /// Dependency manifest
    pub requirements: PathBuf,

    /// Secrets file holding API keys
    pub env_file: PathBuf,

    /// Checked-in template the secrets file is copied from
    pub env_template: PathBuf,

    /// Google OAuth credentials file (existence-checked only)
    pub credentials_file: PathBuf,

    /// Working directories created idempotently
    pub working_dirs: Vec<PathBuf>,

    /// NLTK corpora to download into the venv
    pub corpora: Vec<String>,

    /// Command the user runs to start the application
    pub run_command: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::new(),
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            env_file: PathBuf::from(".env"),
            env_template: PathBuf::from(".env.example"),
            credentials_file: PathBuf::from("credentials.json"),
            working_dirs: vec![PathBuf::from("logs"), PathBuf::from("temp")],
            corpora: vec!["punkt".to_string(), "stopwords".to_string()],
            run_command: "streamlit run app.py".to_string(),
        }
    }
}

impl SetupConfig {
    /// Load configuration for a project root
    ///
    /// Reads `venvup.yaml` if present, otherwise uses defaults. An
    /// absent file is never an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        let mut config = if config_path.exists() {
            let yaml = std::fs::read_to_string(&config_path).map_err(|e| {
                VenvupError::ConfigReadFailed {
                    path: config_path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            Self::from_yaml(&yaml).map_err(|e| match e {
                VenvupError::ConfigParseFailed { reason, .. } => VenvupError::ConfigParseFailed {
                    path: config_path.display().to_string(),
                    reason,
                },
                other => other,
            })?
        } else {
            Self::default()
        };
        config.project_root = project_root.to_path_buf();
        Ok(config)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Absolute path to the virtual environment directory
    pub fn venv_path(&self) -> PathBuf {
        self.project_root.join(&self.venv_dir)
    }

    /// Absolute path to the dependency manifest
    pub fn requirements_path(&self) -> PathBuf {
        self.project_root.join(&self.requirements)
    }

    /// Absolute path to the secrets file
    pub fn env_path(&self) -> PathBuf {
        self.project_root.join(&self.env_file)
    }

    /// Absolute path to the secrets template
    pub fn env_template_path(&self) -> PathBuf {
        self.project_root.join(&self.env_template)
    }

    /// Absolute path to the credentials file
    pub fn credentials_path(&self) -> PathBuf {
        self.project_root.join(&self.credentials_file)
    }

    /// Absolute paths of the working directories
    pub fn working_dir_paths(&self) -> Vec<PathBuf> {
        self.working_dirs
            .iter()
            .map(|d| self.project_root.join(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_project_layout() {
        let config = SetupConfig::default();
        assert_eq!(config.venv_dir, PathBuf::from("venv"));
        assert_eq!(config.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(config.env_file, PathBuf::from(".env"));
        assert_eq!(config.env_template, PathBuf::from(".env.example"));
        assert_eq!(config.credentials_file, PathBuf::from("credentials.json"));
        assert_eq!(config.working_dirs.len(), 2);
        assert_eq!(config.corpora, vec!["punkt", "stopwords"]);
        assert_eq!(config.run_command, "streamlit run app.py");
    }

    #[test]
    fn test_load_without_config_file() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig::load(temp.path()).unwrap();
        assert_eq!(config.project_root, temp.path());
        assert_eq!(config.venv_path(), temp.path().join("venv"));
    }

    #[test]
    fn test_load_with_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "venv_dir: .venv\ncorpora:\n  - punkt\nrun_command: python app.py\n",
        )
        .unwrap();

        let config = SetupConfig::load(temp.path()).unwrap();
        assert_eq!(config.venv_dir, PathBuf::from(".venv"));
        assert_eq!(config.corpora, vec!["punkt"]);
        assert_eq!(config.run_command, "python app.py");
        // Untouched fields keep their defaults
        assert_eq!(config.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "venv_dirr: oops\n").unwrap();

        let err = SetupConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, VenvupError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains("venvup.yaml"));
    }

    #[test]
    fn test_working_dir_paths_are_absolute() {
        let temp = TempDir::new().unwrap();
        let config = SetupConfig::load(temp.path()).unwrap();
        for dir in config.working_dir_paths() {
            assert!(dir.starts_with(temp.path()));
        }
    }
}
