use predicates::prelude::*;

use crate::common::{FileAssert, TestProject};

#[test]
fn test_project_config_sets_output_dir() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    project.write_file("gngen.toml", "output_dir = \"third_party\"\n").unwrap();

    project.gngen().args(["generate", "-i", "conanbuildinfo.json"]).assert().success();

    FileAssert::exists(project.project_path().join("third_party/gtest/BUILD.gn"));
}

#[test]
fn test_flag_overrides_project_config() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    project.write_file("gngen.toml", "output_dir = \"third_party\"\n").unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "elsewhere"])
        .assert()
        .success();

    FileAssert::exists(project.project_path().join("elsewhere/gtest/BUILD.gn"));
    FileAssert::not_exists(project.project_path().join("third_party"));
}

#[test]
fn test_explicit_config_file() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    project
        .write_file(
            "conf/custom.toml",
            "output_dir = \"gen\"\nbuild_file_name = \"BUILD\"\nwrite_manifest = false\n",
        )
        .unwrap();

    project
        .gngen()
        .args(["--config", "conf/custom.toml", "generate", "-i", "conanbuildinfo.json"])
        .assert()
        .success();

    FileAssert::exists(project.project_path().join("gen/gtest/BUILD"));
    FileAssert::not_exists(project.project_path().join("gen/BUILD"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["--config", "nope.toml", "generate", "-i", "conanbuildinfo.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[cfg(unix)]
#[test]
fn test_global_config_in_home() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    std::fs::create_dir_all(project.home_path().join(".gngen")).unwrap();
    std::fs::write(project.home_path().join(".gngen/config.toml"), "output_dir = \"from_home\"\n")
        .unwrap();

    project.gngen().args(["generate", "-i", "conanbuildinfo.json"]).assert().success();

    FileAssert::exists(project.project_path().join("from_home/zlib/BUILD.gn"));
}

#[test]
fn test_invalid_config_value() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    project.write_file("gngen.toml", "max_parallel = 0\n").unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_parallel must be at least 1"));
}
