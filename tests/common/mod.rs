//! Shared helpers for integration tests.
#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory with an isolated home directory.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&home_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            home_dir,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn home_path(&self) -> &Path {
        &self.home_dir
    }

    /// Write `content` to a file relative to the project directory.
    pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
        let full = self.project_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))?;
        Ok(full)
    }

    /// Write the sample `gtest` + `zlib` build info as `conanbuildinfo.json`.
    pub fn write_sample_build_info(&self) -> Result<PathBuf> {
        self.write_file("conanbuildinfo.json", gngen_cli::test_utils::SAMPLE_BUILD_INFO_JSON)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let full = self.project_dir.join(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    /// `gngen` running in the project directory with colors off.
    pub fn gngen(&self) -> Command {
        let mut cmd = Command::cargo_bin("gngen").expect("gngen binary is built");
        cmd.current_dir(&self.project_dir)
            .env("HOME", &self.home_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(!path.exists(), "Expected file to not exist: {}", path.display());
    }
}
