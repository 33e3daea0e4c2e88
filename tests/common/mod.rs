//! Common test utilities for Venvup integration tests
//!
//! Integration tests run the real binary against a temporary project
//! directory with a stub `python3` on a controlled PATH, so the full
//! bootstrap sequence runs hermetically without a real Python.

// Each test binary uses its own subset of these helpers
#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
    /// Directory served as the child process PATH
    pub bin: PathBuf,
}

/// Behavior knobs for the stub interpreter
#[derive(Default)]
pub struct StubPython {
    pub version: String,
    pub pip_install_fails: bool,
    pub corpus_download_fails: bool,
}

impl StubPython {
    pub fn version(version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..Default::default()
        }
    }
}

impl TestProject {
    /// Create a new test project with an empty stub PATH
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let bin = path.join("stub-bin");
        std::fs::create_dir_all(&bin).expect("Failed to create stub bin directory");
        Self { temp, path, bin }
    }

    /// Write the app files the bootstrap sequence reads
    pub fn with_app_files(self) -> Self {
        self.write_file("requirements.txt", "streamlit\nnltk\nrequests\n");
        self.write_file(".env.example", "OPENROUTER_API_KEY=your-key-here\n");
        self
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install a stub `python3` on the test PATH
    ///
    /// The stub answers `--version`, creates a venv layout for
    /// `-m venv`, accepts `-m pip` invocations and runs `-c` snippets,
    /// with failures injectable per [`StubPython`].
    #[cfg(unix)]
    pub fn install_stub_python(&self, stub: &StubPython) {
        use std::os::unix::fs::PermissionsExt;

        let pip_body = if stub.pip_install_fails {
            "if [ \"$4\" = \"-r\" ]; then echo \"resolver error\" >&2; exit 1; fi\n        exit 0"
        } else {
            "exit 0"
        };
        let corpus_body = if stub.corpus_download_fails {
            "echo \"connection refused\" >&2\n    exit 1"
        } else {
            "exit 0"
        };

        let script = format!(
            r#"#!/bin/sh
# Stub python used by venvup integration tests
PATH=/usr/bin:/bin
export PATH
case "$1" in
  --version)
    echo "Python {version}"
    exit 0
    ;;
  -m)
    case "$2" in
      venv)
        mkdir -p "$3/bin"
        cp "$0" "$3/bin/python"
        chmod +x "$3/bin/python"
        exit 0
        ;;
      pip)
        {pip_body}
        ;;
    esac
    exit 0
    ;;
  -c)
    {corpus_body}
    ;;
esac
exit 0
"#,
            version = stub.version,
        );

        let script_path = self.bin.join("python3");
        std::fs::write(&script_path, script).expect("Failed to write stub python");
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub python executable");
    }

    /// Build a venvup command running in this project with the stub PATH
    #[allow(deprecated)]
    pub fn venvup_cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("venvup").expect("venvup binary");
        cmd.current_dir(&self.path).env("PATH", &self.bin);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
