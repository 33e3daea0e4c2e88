//! Python interpreter discovery and version checks

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use crate::error::{Result, VenvupError, python_probe_failed};

/// Minimum interpreter version the agent app supports
pub const MIN_VERSION: PythonVersion = PythonVersion {
    major: 3,
    minor: 7,
    patch: 0,
};

/// A semantic version triple as reported by `python --version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Whether this version satisfies the minimum requirement
    ///
    /// Only major.minor gate the check; the patch level never matters.
    pub fn meets_minimum(&self) -> bool {
        (self.major, self.minor) >= (MIN_VERSION.major, MIN_VERSION.minor)
    }

    /// The requirement rendered as "3.7" for user-facing messages
    pub fn requirement_string() -> String {
        format!("{}.{}", MIN_VERSION.major, MIN_VERSION.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PythonVersion {
    type Err = ();

    /// Parse "3.11.4", "3.11" or "3.13.0rc1" (trailing pre-release
    /// tags on the patch component are ignored)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let major = parse_component(parts.next())?;
        let minor = parse_component(parts.next())?;
        let patch = match parts.next() {
            Some(p) => parse_component(Some(p))?,
            None => 0,
        };
        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

fn parse_component(part: Option<&str>) -> std::result::Result<u32, ()> {
    let part = part.ok_or(())?;
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(());
    }
    digits.parse().map_err(|_| ())
}

/// Locate a Python 3 interpreter on PATH
///
/// Tries `python3` first, then `python`. Whether the fallback actually
/// is Python 3 is settled by the version check that follows.
pub fn locate() -> Result<PathBuf> {
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    for name in ["python3", "python"] {
        if let Some(path) = find_in_path(name, &path_var) {
            return Ok(path);
        }
    }
    Err(VenvupError::PythonNotFound)
}

/// Search an explicit PATH value for an executable
///
/// The PATH value is a parameter so lookups never depend on (or
/// mutate) process-wide environment state.
fn find_in_path(name: &str, path_var: &std::ffi::OsStr) -> Option<PathBuf> {
    for dir in std::env::split_paths(path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for candidate in candidate_names(&dir, name) {
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidate_names(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidate_names(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{name}.exe")), dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Query the version triple of an interpreter
pub fn query_version(python: &Path) -> Result<PythonVersion> {
    let output = Command::new(python)
        .arg("--version")
        .output()
        .map_err(|e| python_probe_failed(e.to_string()))?;

    if !output.status.success() {
        return Err(python_probe_failed(format!(
            "{} --version exited with {}",
            python.display(),
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    parse_version_output(&stdout, &stderr).ok_or_else(|| {
        python_probe_failed(format!(
            "unrecognized version output from {}",
            python.display()
        ))
    })
}

/// Extract the version triple from `python --version` output
///
/// Python 3 prints to stdout; Python 2 printed to stderr, so both
/// streams are checked.
fn parse_version_output(stdout: &str, stderr: &str) -> Option<PythonVersion> {
    for stream in [stdout, stderr] {
        if let Some(rest) = stream.trim().strip_prefix("Python ") {
            if let Ok(version) = rest.parse() {
                return Some(version);
            }
        }
    }
    None
}
