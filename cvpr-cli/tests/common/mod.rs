//! Common test utilities for CLI integration tests.
//!
//! Every command runs against a config file inside a temporary directory and
//! with `CVPR_LOG_MODE` cleared, so the host environment never leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The full set of required flags for a non-interactive run.
#[allow(dead_code)]
pub const REQUIRED_FLAGS: [&str; 8] = [
    "--version",
    "7.3.0",
    "--assignees",
    "alice,bob",
    "--token",
    "ghp_example",
    "--deployType",
    "prod",
];

/// Test environment with an isolated config file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path of the config file the binary reads and writes
    pub config_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment. The config file does not exist yet.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_file = temp_dir.path().join("cv-pull-request.yaml");

        Self {
            temp_dir,
            config_file,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cv-pull-request").expect("Failed to find binary");
        cmd.env_remove("CVPR_LOG_MODE");
        cmd.current_dir(self.path());
        cmd
    }

    /// Get a command builder with `--configFile` pointing into the temp dir.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--configFile").arg(&self.config_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_file, contents).expect("Failed to write config file");
    }

    /// Read the config file back as YAML.
    pub fn read_config(&self) -> serde_yaml::Value {
        let contents = std::fs::read_to_string(&self.config_file).expect("Config file missing");
        serde_yaml::from_str(&contents).expect("Saved config is not valid YAML")
    }
}
