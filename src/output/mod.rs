//! Writing generated GN files to disk.
//!
//! The layout is fixed: the manifest goes to `<root>/<build_file_name>` and each
//! dependency to `<root>/<dep>/<build_file_name>`. Every file is written through
//! a temporary sibling and renamed into place, so an interrupted run never
//! leaves a half-written build file behind.
//!
//! Dependencies are rendered and written on the blocking pool with at most
//! `max_parallel` in flight. A failing dependency does not stop the others;
//! all failures are reported together once every write has finished.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::BUILD_FILE_NAME;
use crate::core::GnGenError;
use crate::dependency::BuildInfo;
use crate::generator::{render_build_file, render_manifest};

/// Where generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    build_file_name: String,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, build_file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            build_file_name: build_file_name.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_file_name(&self) -> &str {
        &self.build_file_name
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.build_file_name)
    }

    pub fn dependency_path(&self, name: &str) -> PathBuf {
        self.root.join(name).join(&self.build_file_name)
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(".", BUILD_FILE_NAME)
    }
}

/// Options for [`write_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Upper bound on dependencies written concurrently
    pub max_parallel: usize,
    pub write_manifest: bool,
    /// Compute paths without touching the file system
    pub dry_run: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            max_parallel: crate::constants::default_max_parallel(),
            write_manifest: true,
            dry_run: false,
        }
    }
}

/// Paths produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub manifest: Option<PathBuf>,
    /// One path per dependency, in input order
    pub dependency_files: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenerationReport {
    /// Manifest first, then dependency files.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.manifest.iter().chain(&self.dependency_files).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        usize::from(self.manifest.is_some()) + self.dependency_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render every dependency of `build_info` and write it under `layout`.
pub async fn write_all(
    build_info: &BuildInfo,
    layout: &OutputLayout,
    options: WriteOptions,
) -> Result<GenerationReport> {
    let manifest = options.write_manifest.then(|| layout.manifest_path());
    if manifest.is_some() {
        check_manifest_collision(build_info, layout)?;
    }

    if options.dry_run {
        return Ok(GenerationReport {
            manifest,
            dependency_files: build_info.dependencies().map(|(name, _)| layout.dependency_path(name)).collect(),
            dry_run: true,
        });
    }

    if let Some(path) = &manifest {
        let path = path.clone();
        tokio::task::spawn_blocking(move || atomic_write(&path, render_manifest().as_bytes()))
            .await
            .context("Manifest write task panicked")??;
        tracing::debug!(target: "output", "Wrote manifest {}", layout.manifest_path().display());
    }

    let concurrency = options.max_parallel.max(crate::constants::MIN_PARALLELISM);
    tracing::debug!(
        target: "output",
        "Writing {} dependencies with concurrency {}",
        build_info.len(),
        concurrency
    );

    let results: Vec<(usize, Result<PathBuf>)> = stream::iter(build_info.dependencies.iter().cloned().enumerate())
        .map(|(index, dep)| {
            let path = layout.dependency_path(&dep.name);
            async move {
                let name = dep.name.clone();
                let result = tokio::task::spawn_blocking(move || {
                    let content = render_build_file(&dep);
                    atomic_write(&path, content.as_bytes()).map(|()| path)
                })
                .await
                .with_context(|| format!("Write task for '{name}' panicked"))
                .and_then(|result| result.with_context(|| format!("Failed to generate '{name}'")));
                (index, result)
            }
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut written: Vec<(usize, PathBuf)> = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for (index, result) in results {
        match result {
            Ok(path) => written.push((index, path)),
            Err(e) => errors.push((index, e)),
        }
    }

    if !errors.is_empty() {
        errors.sort_by_key(|(index, _)| *index);
        let error_msgs: Vec<String> = errors.into_iter().map(|(_, error)| format!("  {error:#}")).collect();
        return Err(anyhow::anyhow!(
            "Failed to write {} build files:\n{}",
            error_msgs.len(),
            error_msgs.join("\n")
        ));
    }

    written.sort_by_key(|(index, _)| *index);
    Ok(GenerationReport {
        manifest,
        dependency_files: written.into_iter().map(|(_, path)| path).collect(),
        dry_run: false,
    })
}

/// Create `path` and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(GnGenError::FileSystemError {
            operation: "create directory (a file is in the way)".to_string(),
            path: path.display().to_string(),
        }
        .into());
    }
    fs::create_dir_all(path).with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Write `content` to `path` via a temporary sibling file and a rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let temp_path = temp_sibling(path);
    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    let written = file
        .write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))
        .and_then(|()| file.sync_all().context("Failed to sync file to disk"));
    drop(file);

    let result = written.and_then(|()| {
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Reject dependencies whose directory would clash with the manifest.
fn check_manifest_collision(build_info: &BuildInfo, layout: &OutputLayout) -> Result<(), GnGenError> {
    match build_info.get(layout.build_file_name()) {
        Some(dep) => Err(GnGenError::InvalidDependency {
            name: dep.name.clone(),
            reason: format!("name collides with the manifest file '{}'", layout.build_file_name()),
        }),
        None => Ok(()),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map_or_else(|| "out".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}
