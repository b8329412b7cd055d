use predicates::prelude::*;

use crate::common::{FileAssert, TestProject};

#[test]
fn test_missing_input_file() {
    let project = TestProject::new().unwrap();

    project
        .gngen()
        .args(["generate", "-i", "missing.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Build info file not found"))
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_unsupported_input_extension() {
    let project = TestProject::new().unwrap();
    project.write_file("deps.yaml", "dependencies: []\n").unwrap();

    project
        .gngen()
        .args(["deps", "-i", "deps.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported build info format"));
}

#[test]
fn test_malformed_json() {
    let project = TestProject::new().unwrap();
    project.write_file("broken.json", "{ \"dependencies\": [").unwrap();

    project
        .gngen()
        .args(["deps", "-i", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build info syntax"));
}

#[test]
fn test_quote_in_value_is_rejected_before_writing() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "deps.json",
            r#"{"dependencies": [{"name": "bad", "defines": ["NAME=\"x\""]}]}"#,
        )
        .unwrap();

    project
        .gngen()
        .args(["generate", "-i", "deps.json", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dependency 'bad'"));

    FileAssert::not_exists(project.project_path().join("out"));
}

#[test]
fn test_path_like_dependency_name_is_rejected() {
    let project = TestProject::new().unwrap();
    project
        .write_file("deps.json", r#"{"dependencies": [{"name": "../escape"}]}"#)
        .unwrap();

    project
        .gngen()
        .args(["generate", "-i", "deps.json", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dependency '../escape'"));

    FileAssert::not_exists(project.project_path().join("escape"));
}

#[test]
fn test_duplicate_dependency_is_rejected() {
    let project = TestProject::new().unwrap();
    project
        .write_file("deps.json", r#"{"dependencies": [{"name": "zlib"}, {"name": "zlib"}]}"#)
        .unwrap();

    project
        .gngen()
        .args(["deps", "-i", "deps.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listed more than once"));
}

#[test]
fn test_file_in_place_of_dependency_directory() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    project.write_file("out/gtest", "not a directory").unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write 1 build files"))
        .stderr(predicate::str::contains("gtest"));

    FileAssert::exists(project.project_path().join("out/zlib/BUILD.gn"));
}
