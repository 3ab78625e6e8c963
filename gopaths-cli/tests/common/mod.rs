//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the binary:
//! a temporary directory tree, a private `HOME`, and a scrubbed set of
//! `GOPATH*` variables.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak the developer's environment into a test.
const SCRUBBED_VARS: &[&str] = &[
    "GOPATH",
    "GOPATHS_CONFIG",
    "GOPATHS_MARKER",
    "GOPATHS_ENV",
    "GOPATHS_TO_ROOT",
    "GOPATHS_FORMAT",
    "GOPATHS_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Home directory used by the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let home = temp_path.join("home");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command for the gopaths binary with a scrubbed environment,
    /// running in the temp directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gopaths").expect("Failed to find gopaths binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home).current_dir(&self.temp_path);
        cmd
    }

    /// Apply the scrubbed environment to a command for another program.
    pub fn isolate(&self, cmd: &mut std::process::Command) {
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home).current_dir(&self.temp_path);
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of `relative` as printed by the binary.
    pub fn entry(&self, relative: &str) -> String {
        self.temp_path
            .join(relative)
            .to_str()
            .expect("non UTF-8 temp dir")
            .to_string()
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a `.go-path` marker into `dir`, creating it.
    pub fn marker(&self, dir: &str, contents: &str) -> PathBuf {
        let path = self.create_dir(dir);
        fs::write(path.join(".go-path"), contents).expect("Failed to write marker");
        path
    }

    /// Write the user configuration file.
    pub fn user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".gopaths");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Run the binary and return stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "gopaths failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
