//! Test environment for running the iotsim binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every run
const IOTSIM_VARS: &[&str] = &[
    "IOTSIM_VARIANT",
    "IOTSIM_REGION",
    "IOTSIM_WORKER_DESIRED_COUNT",
    "IOTSIM_CERTIFICATE_ARN",
    "IOTSIM_WEB_USERNAME",
    "IOTSIM_WEB_PASSWORD",
    "IOTSIM_LOG",
];

/// Result of running an iotsim CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON value
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }
}

/// Isolated working directory for CLI runs
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file relative to the working directory
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run iotsim with logging off
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[("IOTSIM_LOG", "off")])
    }

    /// Run iotsim with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_iotsim"));
        cmd.current_dir(self.root.path()).args(args);
        for var in IOTSIM_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute iotsim");
        output_to_result(output)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
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
