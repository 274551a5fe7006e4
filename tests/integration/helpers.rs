//! Test helpers and utilities

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use tempfile::TempDir;

/// Isolated environment for invoking the `check` binary
pub struct Sandbox {
    lock_dir: TempDir,
    env: Vec<(String, String)>,
}

/// Result of one invocation
pub struct RunResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl Sandbox {
    /// Create a sandbox environment with an empty lock directory
    pub fn new() -> Self {
        Self {
            lock_dir: TempDir::new().expect("Failed to create lock dir"),
            env: Vec::new(),
        }
    }

    /// Set an environment variable for every invocation
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Path of the lock file for a check type
    pub fn lock_path(&self, check: &str) -> PathBuf {
        self.lock_dir.path().join(format!("{}.lock", check))
    }

    /// Write raw content into a lock file
    pub fn write_lock(&self, check: &str, content: &str) {
        fs::write(self.lock_path(check), content).expect("Failed to write lock file");
    }

    /// Run `check` with the given arguments
    pub fn check(&self, args: &[&str]) -> RunResult {
        let mut cmd = Command::cargo_bin("check").expect("check binary not built");
        cmd.args(args)
            .env_remove("LIVENESS_CHECK")
            .env_remove("READINESS_CHECK")
            .env_remove("CHECK_SHELL")
            .env_remove("LOG_LEVEL")
            .env_remove("LOG_FORMAT")
            .env_remove("RUST_LOG")
            .env("CHECK_LOCK_DIR", self.lock_dir.path());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to run check");
        RunResult::from(output)
    }

    /// Run `check` with its stdout pipe closed before it writes anything
    ///
    /// Returns the exit code.
    pub fn check_with_closed_stdout(&self, args: &[&str]) -> i32 {
        let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("check"));
        cmd.args(args)
            .env_remove("LIVENESS_CHECK")
            .env_remove("READINESS_CHECK")
            .env("CHECK_LOCK_DIR", self.lock_dir.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to spawn check");
        drop(child.stdout.take());
        let status = child.wait().expect("Failed to wait for check");
        status.code().unwrap_or(-1)
    }
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Assert exit code and that stdout contains a substring
pub fn assert_outcome(result: &RunResult, code: i32, contains: &str) {
    assert_eq!(
        result.code, code,
        "Expected exit code {}, got {}\nstdout: {}\nstderr: {}",
        code, result.code, result.stdout, result.stderr
    );
    assert!(
        result.stdout.contains(contains),
        "stdout should contain '{}', was: {}",
        contains,
        result.stdout
    );
}
