use gngen_cli::generator::render_manifest;
use gngen_cli::test_utils::GTEST_BUILD_FILE;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_show_prints_dependency_build_file() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["show", "--input", "conanbuildinfo.json", "gtest"])
        .assert()
        .success()
        .stdout(predicate::str::diff(GTEST_BUILD_FILE));
}

#[test]
fn test_show_without_dependency_prints_manifest() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["show", "--input", "conanbuildinfo.json"])
        .assert()
        .success()
        .stdout(predicate::str::diff(render_manifest()));
}

#[test]
fn test_show_writes_no_files() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project.gngen().args(["show", "-i", "conanbuildinfo.json", "zlib"]).assert().success();

    assert!(!project.project_path().join("zlib").exists());
    assert!(!project.project_path().join("BUILD.gn").exists());
}

#[test]
fn test_show_unknown_dependency_fails() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["show", "-i", "conanbuildinfo.json", "boost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Dependency 'boost' not found"))
        .stderr(predicate::str::contains("gngen deps"));
}
