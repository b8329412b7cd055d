//! Generator configuration
//!
//! Settings are read from a TOML file. The first of these that applies wins:
//!
//! 1. The path given with `--config` (must exist)
//! 2. `gngen.toml` in the current directory
//! 3. `~/.gngen/config.toml` (`%LOCALAPPDATA%\gngen\config.toml` on Windows)
//! 4. Built-in defaults
//!
//! Files are not merged. Command-line flags are applied on top of whichever
//! configuration was loaded.
//!
//! ```toml
//! output_dir = "third_party"
//! build_file_name = "BUILD.gn"
//! write_manifest = true
//! max_parallel = 8
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{BUILD_FILE_NAME, PROJECT_CONFIG_FILE, default_max_parallel};
use crate::core::{ErrorContext, GnGenError, IntoAnyhowWithContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory that receives the manifest and one subdirectory per dependency
    pub output_dir: PathBuf,

    /// File name used for every generated build file
    pub build_file_name: String,

    /// Whether to write the root manifest
    pub write_manifest: bool,

    /// Maximum number of dependencies written concurrently.
    ///
    /// Default: 2 × CPU cores
    pub max_parallel: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            build_file_name: BUILD_FILE_NAME.to_string(),
            write_manifest: true,
            max_parallel: default_max_parallel(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration following the lookup order above.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let global = Self::default_path().ok();
        Self::resolve(explicit, &cwd, global.as_deref()).await
    }

    /// Lookup with the project directory and global path spelled out.
    pub async fn resolve(
        explicit: Option<&Path>,
        project_dir: &Path,
        global: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GnGenError::ConfigNotFound {
                    path: path.display().to_string(),
                }
                .into_anyhow_with_context(ErrorContext::suggestion(format!(
                    "Create {} or drop --config to use {PROJECT_CONFIG_FILE}",
                    path.display()
                ))));
            }
            return Self::load_from(path).await;
        }

        let project = project_dir.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            return Self::load_from(&project).await;
        }

        Self::load_with_optional(global.map(Path::to_path_buf)).await
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path).await,
            _ => {
                tracing::debug!(target: "config", "No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate()?;

        tracing::debug!(target: "config", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `~/.gngen/config.toml`, or `%LOCALAPPDATA%\gngen\config.toml` on Windows.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("gngen")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".gngen")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), GnGenError> {
        if self.max_parallel == 0 {
            return Err(GnGenError::ConfigError {
                message: "max_parallel must be at least 1".to_string(),
            });
        }
        let name = self.build_file_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(GnGenError::ConfigError {
                message: format!("build_file_name '{name}' must be a plain file name"),
            });
        }
        Ok(())
    }
}
