//! The bootstrap step driver
//!
//! The original shell script chained its steps with `&&`/`||`; here the
//! sequence is an explicit ordered list of typed steps. Fatal failures
//! propagate as errors and abort, soft failures become warnings and
//! execution continues, silent skips print nothing.

use crate::config::SetupConfig;
use crate::corpus;
use crate::error::{Result, python_too_old};
use crate::python::{self, PythonVersion};
use crate::ui::Reporter;
use crate::venv::{self, Venv};
use crate::workspace::{self, EnvOutcome};

/// Result of a single non-fatal bootstrap step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step did its work
    Completed,
    /// The artifact already existed; nothing to do
    Skipped,
    /// The step failed but setup continues; carries the warning detail
    SoftFailed(String),
}

/// Flags controlling a setup run
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    pub force: bool,
    pub skip_corpora: bool,
    pub dry_run: bool,
}

/// Run the full bootstrap sequence
pub fn run(config: &SetupConfig, opts: &BootstrapOptions, reporter: &Reporter) -> Result<()> {
    if opts.dry_run {
        print_plan(config, opts, reporter);
        return Ok(());
    }

    // Gate 1+2: interpreter present and new enough
    let base_python = python::locate()?;
    reporter.command(&format!("{} --version", base_python.display()));
    let version = python::query_version(&base_python)?;
    if !version.meets_minimum() {
        return Err(python_too_old(
            PythonVersion::requirement_string(),
            version.to_string(),
        ));
    }
    reporter.success(&format!("Python {version} found"));

    // Gate 3: isolated environment
    let venv = Venv::new(config.venv_path());
    if opts.force {
        venv.remove()?;
    }
    reporter.command(&format!(
        "{} -m venv {}",
        base_python.display(),
        venv.root().display()
    ));
    let outcome = if venv.ensure(&base_python)? {
        StepOutcome::Completed
    } else {
        StepOutcome::Skipped
    };
    if outcome == StepOutcome::Completed {
        reporter.success("Virtual environment created");
    }

    // Gate 4: from here on, every child runs the venv's interpreter
    let venv_python = venv.activate()?;
    reporter.success("Virtual environment activated");

    // Soft: pip self-upgrade
    reporter.command(&format!(
        "{} -m pip install --upgrade pip",
        venv_python.display()
    ));
    let spinner = reporter.spinner("Upgrading pip");
    let pip_outcome = match venv::upgrade_pip(&venv_python) {
        Ok(()) => StepOutcome::Completed,
        Err(detail) => StepOutcome::SoftFailed(detail),
    };
    spinner.finish_and_clear();
    if let StepOutcome::SoftFailed(detail) = pip_outcome {
        reporter.warn(&format!("pip upgrade warning: {detail}"));
    }

    // Fatal: dependency manifest
    reporter.command(&format!(
        "{} -m pip install -r {}",
        venv_python.display(),
        config.requirements_path().display()
    ));
    let spinner = reporter.spinner("Installing dependencies");
    let install_result = venv::install_requirements(&venv_python, &config.requirements_path());
    spinner.finish_and_clear();
    install_result?;
    reporter.success("Dependencies installed");

    // Silent: working directories
    workspace::ensure_working_dirs(config)?;

    // Secrets file from template
    match workspace::materialize_env(config)? {
        EnvOutcome::Created => reporter.info("Please edit .env file with your API keys"),
        EnvOutcome::AlreadyPresent => {}
        EnvOutcome::TemplateMissing => reporter.warn(&format!(
            "{} not found, skipping .env creation",
            config.env_template.display()
        )),
    }

    // Soft: corpora
    if !opts.skip_corpora {
        let spinner = reporter.spinner("Downloading NLTK data");
        let corpus_outcome = match corpus::download(&venv_python, &config.corpora) {
            Ok(()) => StepOutcome::Completed,
            Err(detail) => StepOutcome::SoftFailed(detail),
        };
        spinner.finish_and_clear();
        match corpus_outcome {
            StepOutcome::SoftFailed(detail) => {
                reporter.warn(&format!("NLTK download warning: {detail}"));
            }
            _ => reporter.info("NLTK data downloaded"),
        }
    }

    // Notice only: external credentials
    if !workspace::credentials_present(config) {
        reporter.warn(&format!(
            "{} not found. Please provide it from Google Cloud Console.",
            config.credentials_file.display()
        ));
    }

    reporter.success(&format!("Setup completed! Run: {}", config.run_command));
    Ok(())
}

/// Print the planned actions without touching anything
fn print_plan(config: &SetupConfig, opts: &BootstrapOptions, reporter: &Reporter) {
    reporter.info("Dry run, nothing will be changed:");
    reporter.info(&format!(
        "  Would check PATH for Python {} or newer",
        PythonVersion::requirement_string()
    ));
    if opts.force {
        reporter.info(&format!(
            "  Would delete and recreate virtual environment at {}",
            config.venv_dir.display()
        ));
    } else {
        reporter.info(&format!(
            "  Would create virtual environment at {} if absent",
            config.venv_dir.display()
        ));
    }
    reporter.info("  Would upgrade pip");
    reporter.info(&format!(
        "  Would install dependencies from {}",
        config.requirements.display()
    ));
    for dir in &config.working_dirs {
        reporter.info(&format!("  Would create directory {}", dir.display()));
    }
    reporter.info(&format!(
        "  Would copy {} to {} if absent",
        config.env_template.display(),
        config.env_file.display()
    ));
    if !opts.skip_corpora {
        reporter.info(&format!(
            "  Would download NLTK corpora: {}",
            config.corpora.join(", ")
        ));
    }
    reporter.info(&format!(
        "  Would check for {}",
        config.credentials_file.display()
    ));
}

/// Readiness of each bootstrap artifact, as probed by `venvup doctor`
#[derive(Debug)]
pub struct Readiness {
    /// Interpreter found on PATH, with its version
    pub python: Option<PythonVersion>,
    /// Venv directory exists and holds its own interpreter
    pub venv_ready: bool,
    /// Secrets file present
    pub env_file: bool,
    /// External credentials file present
    pub credentials: bool,
    /// Configured working directories that do not exist yet
    pub missing_dirs: Vec<std::path::PathBuf>,
}

impl Readiness {
    /// Whether every artifact setup creates or requires is in place
    pub fn is_ready(&self) -> bool {
        self.python.map(|v| v.meets_minimum()).unwrap_or(false)
            && self.venv_ready
            && self.env_file
            && self.credentials
            && self.missing_dirs.is_empty()
    }
}

/// Probe the project without modifying it
pub fn check_status(config: &SetupConfig) -> Readiness {
    let python = python::locate()
        .ok()
        .and_then(|p| python::query_version(&p).ok());
    let venv_ready = Venv::new(config.venv_path()).activate().is_ok();

    Readiness {
        python,
        venv_ready,
        env_file: config.env_path().is_file(),
        credentials: workspace::credentials_present(config),
        missing_dirs: workspace::missing_working_dirs(config),
    }
}
