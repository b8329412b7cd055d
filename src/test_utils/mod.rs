//! Test utilities for gngen
//!
//! Available to unit tests and, through the `test-utils` feature, to
//! integration tests:
//! - [`init_test_logging`] - one-time tracing setup routed through the test writer
//! - [`fixtures`] - sample dependencies, build-info files and their expected output
//!
//! # Example
//!
//! ```rust,no_run
//! use gngen_cli::generator::render_build_file;
//! use gngen_cli::test_utils::{GTEST_BUILD_FILE, gtest_dependency};
//!
//! assert_eq!(render_build_file(&gtest_dependency()), GTEST_BUILD_FILE);
//! ```

pub mod fixtures;

pub use fixtures::{
    GTEST_BUILD_FILE, SAMPLE_BUILD_INFO_JSON, gtest_dependency, write_sample_build_info,
};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
