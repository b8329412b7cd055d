//! Resolved dependency metadata read from a build-info file.
//!
//! The package manager that resolved the dependency graph hands us one record
//! per dependency with its include/library paths and flags already merged. Two
//! encodings are accepted:
//!
//! - **JSON**, shaped like the `conanbuildinfo.json` written by Conan's `json`
//!   generator. Unknown keys are ignored and `cxxflags` is accepted for
//!   `cppflags`.
//! - **TOML**, with one `[[dependencies]]` table per dependency.
//!
//! ```toml
//! [[dependencies]]
//! name = "gtest"
//! include_paths = ["/opt/gtest/include"]
//! lib_paths = ["/opt/gtest/lib"]
//! libs = ["gtest", "gtest_main"]
//! ```
//!
//! Dependency order is preserved and is the order generated files are
//! reported in.
//!
//! Loading validates the input contract the GN printer relies on (see
//! [`BuildInfo::validate`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::core::GnGenError;

/// Build metadata for one resolved dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyInfo {
    pub name: String,
    pub include_paths: Vec<String>,
    pub defines: Vec<String>,
    /// C compiler flags
    pub cflags: Vec<String>,
    /// C++ compiler flags
    #[serde(alias = "cxxflags")]
    pub cppflags: Vec<String>,
    pub lib_paths: Vec<String>,
    pub sharedlinkflags: Vec<String>,
    pub exelinkflags: Vec<String>,
    /// Library names; order is link order.
    pub libs: Vec<String>,
}

impl DependencyInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Every string field with its key, in declaration order.
    fn fields(&self) -> [(&'static str, &[String]); 8] {
        [
            ("include_paths", self.include_paths.as_slice()),
            ("defines", self.defines.as_slice()),
            ("cflags", self.cflags.as_slice()),
            ("cppflags", self.cppflags.as_slice()),
            ("lib_paths", self.lib_paths.as_slice()),
            ("sharedlinkflags", self.sharedlinkflags.as_slice()),
            ("exelinkflags", self.exelinkflags.as_slice()),
            ("libs", self.libs.as_slice()),
        ]
    }

    /// Check that this dependency can be written as a GN file.
    ///
    /// The name becomes a directory, so it must be a single normal path
    /// component. No string may contain `"` or a newline, or end in `\`, since
    /// GN strings are written without escaping.
    pub fn validate(&self) -> Result<(), GnGenError> {
        let invalid = |reason: String| GnGenError::InvalidDependency {
            name: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if self.name.starts_with('.') {
            return Err(invalid("name must not start with '.'".to_string()));
        }
        if let Some(c) = self.name.chars().find(|c| matches!(c, '/' | '\\')) {
            return Err(invalid(format!("name contains path separator '{c}'")));
        }
        check_gn_string("name", &self.name).map_err(invalid)?;

        for (field, values) in self.fields() {
            for value in values {
                check_gn_string(field, value).map_err(invalid)?;
            }
        }

        if self.libs.iter().any(String::is_empty) {
            return Err(invalid("libs contains an empty library name".to_string()));
        }
        Ok(())
    }
}

fn check_gn_string(field: &str, value: &str) -> Result<(), String> {
    if value.contains('"') {
        return Err(format!("{field} value {value:?} contains '\"'"));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(format!("{field} value {value:?} contains a line break"));
    }
    // GN would read `\"` as an escaped quote
    if value.ends_with('\\') {
        return Err(format!("{field} value {value:?} ends with '\\'"));
    }
    Ok(())
}

/// All dependencies of one build, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub dependencies: Vec<DependencyInfo>,
}

impl BuildInfo {
    pub fn new(dependencies: Vec<DependencyInfo>) -> Self {
        Self {
            dependencies,
        }
    }

    /// Load and validate a build-info file, choosing the format from its
    /// extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GnGenError::InputNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let format = InputFormat::from_path(path).ok_or_else(|| GnGenError::UnsupportedInputFormat {
            path: path.display().to_string(),
        })?;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read build info from {}", path.display()))?;

        let info = Self::parse(&content, format).map_err(|reason| GnGenError::InputParseError {
            file: path.display().to_string(),
            reason,
        })?;
        info.validate()?;

        tracing::debug!(
            target: "dependency",
            "Loaded {} dependencies from {}",
            info.dependencies.len(),
            path.display()
        );
        Ok(info)
    }

    /// Parse build info text without validating it.
    pub fn parse(content: &str, format: InputFormat) -> Result<Self, String> {
        match format {
            InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            InputFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Validate every dependency and reject repeated names.
    pub fn validate(&self) -> Result<(), GnGenError> {
        let mut seen = HashSet::new();
        for dep in &self.dependencies {
            dep.validate()?;
            if !seen.insert(dep.name.as_str()) {
                return Err(GnGenError::DuplicateDependency {
                    name: dep.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// `(name, metadata)` pairs in resolution order.
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &DependencyInfo)> {
        self.dependencies.iter().map(|dep| (dep.name.as_str(), dep))
    }

    pub fn get(&self, name: &str) -> Option<&DependencyInfo> {
        self.dependencies.iter().find(|dep| dep.name == name)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Keep only the named dependencies, preserving resolution order.
    ///
    /// An empty `names` keeps everything.
    pub fn select(self, names: &[String]) -> Result<Self, GnGenError> {
        if names.is_empty() {
            return Ok(self);
        }
        if let Some(missing) = names.iter().find(|name| self.get(name).is_none()) {
            return Err(GnGenError::DependencyNotFound {
                name: missing.clone(),
            });
        }
        let dependencies =
            self.dependencies.into_iter().filter(|dep| names.contains(&dep.name)).collect();
        Ok(Self::new(dependencies))
    }
}

/// Encodings a build-info file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}
