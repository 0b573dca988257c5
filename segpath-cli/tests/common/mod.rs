//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment rooted in a temporary directory.
///
/// Commands run with the temporary directory as working directory and with
/// the segpath environment variables cleared, so results do not depend on
/// the caller's shell.
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

    /// A command for the segpath binary running inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("segpath").expect("Failed to find segpath binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("SEGPATH_STYLE")
            .env_remove("SEGPATH_OUTPUT_FORMAT")
            .env_remove("SEGPATH_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute string form of `rel` inside the environment.
    pub fn string(&self, rel: &str) -> String {
        self.temp_path
            .join(rel)
            .to_str()
            .expect("temp paths are UTF-8")
            .to_string()
    }

    /// Create a directory (and parents) under the environment.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file (creating parents) under the environment.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run the command and return stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run segpath");
        assert!(
            output.status.success(),
            "segpath {args:?} failed: {}",
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
