//! Test environment for isolated portalmap runs.
//!
//! Provides `TestEnv` - a temp working directory plus helpers to run the
//! portalmap binary inside it with a clean `PORTALMAP_*` environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const CLEARED_VARS: &[&str] = &[
    "PORTALMAP_INPUT",
    "PORTALMAP_OUTPUT",
    "PORTALMAP_FIELDS",
    "PORTALMAP_MISSING_ID",
    "PORTALMAP_PRETTY",
    "RUST_LOG",
];

/// Result of running the portalmap binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// stdout with the trailing newline removed
    pub fn stdout_line(&self) -> &str {
        self.stdout.trim_end_matches('\n')
    }
}

/// Isolated working directory for one test
pub struct TestEnv {
    /// Temporary working directory
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_portalmap")),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the default input file (`internal_research.json`)
    pub fn write_input(&self, content: &str) {
        self.write_file("internal_research.json", content);
    }

    /// Parse a JSON file relative to the working directory
    pub fn read_json(&self, relative: &str) -> Value {
        let full_path = self.path(relative);
        let content = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", full_path.display(), e));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", full_path.display(), e))
    }

    /// Run portalmap in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run portalmap in the working directory with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    /// Run portalmap from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for key in CLEARED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute portalmap");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
