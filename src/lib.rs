//! gngen - GN build declarations for resolved C/C++ dependencies
//!
//! A package manager resolves a dependency graph and knows, for every
//! dependency, where its headers and libraries live and which flags it needs.
//! gngen turns that metadata into GN build files so a GN project can depend on
//! the packages without hand-written glue.
//!
//! # Architecture Overview
//!
//! ```text
//! build info (.json/.toml) ──► dependency ──► generator ──► gn ──► output
//!                                                 │                  │
//!                                            manifest text     <root>/BUILD.gn
//!                                                             <root>/<dep>/BUILD.gn
//! ```
//!
//! # Core Modules
//!
//! - [`gn`] - GN grammar model (values, statements, documents) and its printer
//! - [`generator`] - maps one dependency to its config and group declarations
//! - [`dependency`] - loading and validating build-info files
//! - [`output`] - output layout and atomic, bounded-concurrency file writing
//! - [`config`] - `gngen.toml` / `~/.gngen/config.toml` settings
//! - [`cli`] - the `gngen` command-line interface
//! - [`core`] - error types and user-facing error reporting
//!
//! # Generated Layout
//!
//! For a dependency `gtest` with libraries `gtest` and `gtest_main`, the file
//! `<root>/gtest/BUILD.gn` declares the configs `gtest_include`,
//! `gtest_runtime_path`, `gtest_lib_gtest` and `gtest_lib_gtest_main`, each
//! exposed through a group. A GN target then depends on
//! `//third_party/gtest:include` and `//third_party/gtest:gtest_main`.
//!
//! # Example
//!
//! ```rust
//! use gngen_cli::dependency::DependencyInfo;
//! use gngen_cli::generator::render_build_file;
//!
//! let mut fmt = DependencyInfo::new("fmt");
//! fmt.include_paths = vec!["/opt/fmt/include".to_string()];
//! fmt.libs = vec!["fmt".to_string()];
//!
//! let text = render_build_file(&fmt);
//! assert!(text.contains("  include_dirs = [ \"/opt/fmt/include\" ]\n"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod dependency;
pub mod generator;
pub mod gn;
pub mod output;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
