//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the user's real configuration
//! - Fixture helpers for writing chain files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working area.
///
/// Commands built through [`TestEnv::command`] are isolated from the
/// invoking user's configuration: the config file is pointed into the
/// temporary directory and `FUSECTX_*` environment variables are cleared.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without isolation flags.
    ///
    /// Use this only when a test needs full control over --config and the
    /// environment.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("fusectx").expect("Failed to find fusectx binary")
    }

    /// Get a command builder isolated from the user's configuration.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config")
            .arg(self.temp_path.join("test-config.yaml"));
        cmd.env_remove("FUSECTX_CONFIG")
            .env_remove("FUSECTX_ENTRY_FILE")
            .env_remove("FUSECTX_OUTPUT_EXT")
            .env_remove("FUSECTX_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory, creating parent directories.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the isolated config file used by [`TestEnv::command`].
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("test-config.yaml", content)
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
