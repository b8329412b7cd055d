use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_deps_lists_dependencies_with_labels() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["deps", "--input", "conanbuildinfo.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "gtest (2 libs): include, runtime_path, gtest, gtest_main",
        ))
        .stdout(predicate::str::contains("zlib (1 lib): include, runtime_path, z"));
}

#[test]
fn test_deps_quiet_lists_names_only() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["-q", "deps", "-i", "conanbuildinfo.json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("gtest\nzlib\n"));
}

#[test]
fn test_deps_empty_build_info() {
    let project = TestProject::new().unwrap();
    project.write_file("empty.json", r#"{"dependencies": []}"#).unwrap();

    project
        .gngen()
        .args(["deps", "-i", "empty.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
