//! Sample inputs and the build files they produce.

use std::path::{Path, PathBuf};

use crate::dependency::DependencyInfo;

/// Build info with `gtest` and `zlib`, in the shape Conan's `json` generator writes.
pub const SAMPLE_BUILD_INFO_JSON: &str = r#"{
  "deps_env_info": {},
  "dependencies": [
    {
      "version": "1.10.0",
      "name": "gtest",
      "include_paths": ["/usr/include"],
      "lib_paths": ["/usr/lib"],
      "bin_paths": [],
      "libs": ["gtest", "gtest_main"],
      "defines": [],
      "cflags": [],
      "cxxflags": [],
      "sharedlinkflags": [],
      "exelinkflags": []
    },
    {
      "version": "1.2.11",
      "name": "zlib",
      "include_paths": ["/opt/zlib/include"],
      "lib_paths": ["/opt/zlib/lib"],
      "libs": ["z"],
      "defines": ["ZLIB_CONST"],
      "cflags": ["-fPIC"],
      "cxxflags": [],
      "sharedlinkflags": ["-Wl,-rpath,/opt/zlib/lib"],
      "exelinkflags": []
    }
  ]
}
"#;

/// Expected build file for [`gtest_dependency`].
pub const GTEST_BUILD_FILE: &str = r#"config("gtest_include") {
  include_dirs = [ "/usr/include" ]
  defines = []
  cflags_c = []
  cflags_cc = []
  visibility = [ ":include" ]
}

config("gtest_runtime_path") {
  lib_dirs = [ "/usr/lib" ]
  ldflags = []
  visibility = [ ":runtime_path" ]
}

config("gtest_lib_gtest") {
  libs = [ "gtest" ]
  visibility = [ ":gtest" ]
}

config("gtest_lib_gtest_main") {
  libs = [ "gtest_main" ]
  visibility = [ ":gtest_main" ]
}

group("include") {
  public_configs = [ ":gtest_include" ]
}

group("runtime_path") {
  public_configs = [ ":gtest_runtime_path" ]
}

group("gtest") {
  public_configs = [ ":gtest_lib_gtest" ]
}

group("gtest_main") {
  public_configs = [ ":gtest_lib_gtest_main" ]
}
"#;

/// `gtest` with one include dir, one lib dir and two libraries.
pub fn gtest_dependency() -> DependencyInfo {
    DependencyInfo {
        name: "gtest".to_string(),
        include_paths: vec!["/usr/include".to_string()],
        lib_paths: vec!["/usr/lib".to_string()],
        libs: vec!["gtest".to_string(), "gtest_main".to_string()],
        ..DependencyInfo::default()
    }
}

/// Write [`SAMPLE_BUILD_INFO_JSON`] to `dir/conanbuildinfo.json`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_sample_build_info(dir: &Path) -> PathBuf {
    let path = dir.join("conanbuildinfo.json");
    std::fs::write(&path, SAMPLE_BUILD_INFO_JSON).expect("failed to write sample build info");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{BuildInfo, InputFormat};
    use crate::generator::render_build_file;

    #[test]
    fn test_sample_parses_to_gtest_fixture() {
        let info = BuildInfo::parse(SAMPLE_BUILD_INFO_JSON, InputFormat::Json).unwrap();
        info.validate().unwrap();
        assert_eq!(info.get("gtest"), Some(&gtest_dependency()));
        assert_eq!(render_build_file(&gtest_dependency()), GTEST_BUILD_FILE);
    }
}
