//! Global constants used throughout the gngen codebase.
//!
//! Formatting thresholds, output naming and the manifest metadata live here so
//! that the values downstream GN builds depend on are defined in one place.

/// Spaces added per nesting level in generated GN text.
pub const INDENT_WIDTH: usize = 2;

/// Longest list that is rendered on a single line.
///
/// Lists with more elements put one element per line.
pub const INLINE_LIST_MAX: usize = 3;

/// File name of every generated GN file, including the root manifest.
pub const BUILD_FILE_NAME: &str = "BUILD.gn";

/// Version recorded in the root manifest.
pub const GENERATOR_VERSION: &str = "0.1";

/// Variable that carries [`GENERATOR_VERSION`] in the root manifest.
pub const GENERATOR_VERSION_VAR: &str = "conan_gn_generator_version";

/// Licence line written into the root manifest.
pub const GENERATOR_LICENCE: &str =
    "MIT License (https://github.com/matlo607/conan-gn-generator/blob/master/LICENSE)";

/// Project-local configuration file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "gngen.toml";

/// Minimum number of parallel file writes regardless of CPU count.
pub const MIN_PARALLELISM: usize = 1;

/// Multiplier applied to CPU core count for default parallelism.
pub const PARALLELISM_CORE_MULTIPLIER: usize = 2;

/// Default CPU core count when detection fails.
///
/// Used as a fallback when `std::thread::available_parallelism()` returns an error.
pub const FALLBACK_CORE_COUNT: usize = 4;

/// Default number of dependencies rendered and written concurrently.
pub fn default_max_parallel() -> usize {
    let cores = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(FALLBACK_CORE_COUNT);
    (cores * PARALLELISM_CORE_MULTIPLIER).max(MIN_PARALLELISM)
}
