//! NLTK corpus download
//!
//! The original setup embedded an inline interpreter snippet; here it
//! is a typed function with its own failure boundary. Any failure is
//! reported as a warning detail and never aborts setup.

use std::path::Path;
use std::process::Command;

/// Download the given corpora through the venv's interpreter
///
/// One child invocation fetches all corpora with per-item progress
/// suppressed. `Err` carries the warning detail for the caller.
pub fn download(venv_python: &Path, corpora: &[String]) -> std::result::Result<(), String> {
    if corpora.is_empty() {
        return Ok(());
    }

    let script = download_script(corpora);
    let output = Command::new(venv_python)
        .arg("-c")
        .arg(&script)
        .output()
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| format!("download exited with {}", output.status));
        return Err(detail);
    }
    Ok(())
}

/// Build the one-shot download snippet
///
/// `nltk.download` returns False instead of raising on some failures,
/// so the snippet converts both paths into a nonzero exit.
fn download_script(corpora: &[String]) -> String {
    let names = corpora
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "import sys, nltk; \
         ok = all(nltk.download(name, quiet=True) for name in [{names}]); \
         sys.exit(0 if ok else 1)"
    )
}
