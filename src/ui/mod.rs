//! Console output for the bootstrap sequence
//!
//! Status lines use the `[SUCCESS]`/`[ERROR]` markers of the original
//! setup script; long-running child processes get an indicatif spinner
//! that is cleared before the status line is printed.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::VenvupError;

/// Status line reporter
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Green `[SUCCESS]` line
    pub fn success(&self, msg: &str) {
        println!("{} {}", Style::new().green().bold().apply_to("[SUCCESS]"), msg);
    }

    /// Yellow warning line (soft failures and notices)
    pub fn warn(&self, msg: &str) {
        println!("{}", Style::new().yellow().apply_to(msg));
    }

    /// Plain informational line
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    /// Echo a child command line, only in verbose mode
    pub fn command(&self, cmd: &str) {
        if self.verbose {
            println!("{}", Style::new().dim().apply_to(format!("$ {cmd}")));
        }
    }

    /// Spinner shown while a child process runs
    ///
    /// Callers must `finish_and_clear()` before printing the result.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}

/// Red `[ERROR]` line on stderr for a fatal error
pub fn print_error(err: &VenvupError) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("[ERROR]"), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lines_do_not_panic() {
        let reporter = Reporter::new(false);
        reporter.success("Virtual environment created");
        reporter.warn("NLTK download warning: offline");
        reporter.info("Please edit .env file with your API keys");
        reporter.command("python3 -m venv venv");
    }

    #[test]
    fn test_verbose_command_echo_does_not_panic() {
        let reporter = Reporter::new(true);
        reporter.command("python3 --version");
    }

    #[test]
    fn test_spinner_finish_and_clear() {
        let reporter = Reporter::new(false);
        let pb = reporter.spinner("Installing dependencies");
        pb.finish_and_clear();
    }

    #[test]
    fn test_print_error_does_not_panic() {
        print_error(&VenvupError::PythonNotFound);
    }
}
