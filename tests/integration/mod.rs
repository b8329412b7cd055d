//! Integration test suite for gngen
//!
//! End-to-end tests that run the `gngen` binary against build-info files in
//! temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config**: `gngen.toml`, `--config` and flag precedence
//! - **deps**: `deps` listing
//! - **errors**: exit codes and error reporting for bad input
//! - **generate**: the generated tree on disk
//! - **show**: printing single build files to stdout

#[path = "../common/mod.rs"]
mod common;

mod config;
mod deps;
mod errors;
mod generate;
mod show;
