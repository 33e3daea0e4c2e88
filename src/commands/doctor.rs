//! Doctor command implementation
//!
//! Read-only readiness report; always exits 0 so it can be run from
//! scripts without masking the real setup exit codes.

use std::path::PathBuf;

use console::Style;

use crate::bootstrap;
use crate::config::SetupConfig;
use crate::error::{Result, io_error};

/// Report readiness of each bootstrap artifact
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let root = match project {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("cannot determine current directory: {e}")))?,
    };

    // A broken config file is one more missing artifact to report,
    // not a reason to bail with a non-zero exit.
    let config = match SetupConfig::load(&root) {
        Ok(config) => config,
        Err(e) => {
            print_missing(&format!("readable configuration ({e})"));
            println!();
            println!("Fix {} and re-run: venvup doctor", crate::config::CONFIG_FILE);
            return Ok(());
        }
    };
    let readiness = bootstrap::check_status(&config);

    match readiness.python {
        Some(version) if version.meets_minimum() => {
            print_ok(&format!("Python {version} on PATH"));
        }
        Some(version) => print_missing(&format!("Python {version} on PATH (3.7+ required)")),
        None => print_missing("Python 3 on PATH"),
    }

    if readiness.venv_ready {
        print_ok(&format!("virtual environment ({})", config.venv_dir.display()));
    } else {
        print_missing(&format!(
            "virtual environment ({})",
            config.venv_dir.display()
        ));
    }

    if readiness.env_file {
        print_ok(&config.env_file.display().to_string());
    } else {
        print_missing(&config.env_file.display().to_string());
    }

    if readiness.credentials {
        print_ok(&config.credentials_file.display().to_string());
    } else {
        print_missing(&config.credentials_file.display().to_string());
    }

    if readiness.missing_dirs.is_empty() {
        print_ok("working directories");
    } else {
        for dir in &readiness.missing_dirs {
            print_missing(&format!("directory {}", dir.display()));
        }
    }

    println!();
    if readiness.is_ready() {
        println!("Everything is in place. Run: {}", config.run_command);
    } else {
        println!("Some artifacts are missing. Run: venvup setup");
    }

    Ok(())
}

fn print_ok(what: &str) {
    println!("  {} {}", Style::new().green().apply_to("ok"), what);
}

fn print_missing(what: &str) {
    println!("  {} {}", Style::new().red().apply_to("missing"), what);
}
