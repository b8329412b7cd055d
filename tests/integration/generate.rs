use gngen_cli::generator::render_manifest;
use gngen_cli::test_utils::GTEST_BUILD_FILE;
use predicates::prelude::*;

use crate::common::{FileAssert, TestProject};

#[test]
fn test_generate_writes_manifest_and_dependency_files() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["generate", "--input", "conanbuildinfo.json", "--output-dir", "third_party"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 build files (2 dependencies)"));

    assert_eq!(project.read_file("third_party/BUILD.gn").unwrap(), render_manifest());
    assert_eq!(project.read_file("third_party/gtest/BUILD.gn").unwrap(), GTEST_BUILD_FILE);

    let zlib = project.read_file("third_party/zlib/BUILD.gn").unwrap();
    assert!(zlib.contains("  defines = [ \"ZLIB_CONST\" ]\n"));
    assert!(zlib.contains("  cflags_c = [ \"-fPIC\" ]\n"));
    assert!(zlib.contains("  ldflags = [ \"-Wl,-rpath,/opt/zlib/lib\" ]\n"));
    assert!(zlib.ends_with("group(\"z\") {\n  public_configs = [ \":zlib_lib_z\" ]\n}\n"));
}

#[test]
fn test_generate_defaults_to_current_directory() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project.gngen().args(["generate", "-i", "conanbuildinfo.json"]).assert().success();

    FileAssert::exists(project.project_path().join("BUILD.gn"));
    FileAssert::exists(project.project_path().join("gtest/BUILD.gn"));
    FileAssert::exists(project.project_path().join("zlib/BUILD.gn"));
}

#[test]
fn test_generate_is_repeatable() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();
    let args = ["generate", "-i", "conanbuildinfo.json", "-o", "out"];

    project.gngen().args(args).assert().success();
    let first = project.read_file("out/gtest/BUILD.gn").unwrap();
    project.gngen().args(args).assert().success();
    let second = project.read_file("out/gtest/BUILD.gn").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "out", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("gtest"))
        .stdout(predicate::str::contains("zlib"));

    FileAssert::not_exists(project.project_path().join("out"));
}

#[test]
fn test_generate_only_selected_dependencies() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "out", "--only", "zlib"])
        .assert()
        .success();

    FileAssert::exists(project.project_path().join("out/zlib/BUILD.gn"));
    FileAssert::not_exists(project.project_path().join("out/gtest"));
}

#[test]
fn test_generate_without_manifest() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "out", "--no-manifest"])
        .assert()
        .success();

    FileAssert::not_exists(project.project_path().join("out/BUILD.gn"));
    FileAssert::exists(project.project_path().join("out/gtest/BUILD.gn"));
}

#[test]
fn test_generate_from_toml_input() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "deps.toml",
            r#"
[[dependencies]]
name = "gtest"
include_paths = ["/usr/include"]
lib_paths = ["/usr/lib"]
libs = ["gtest", "gtest_main"]
"#,
        )
        .unwrap();

    project.gngen().args(["generate", "-i", "deps.toml", "-o", "out"]).assert().success();

    assert_eq!(project.read_file("out/gtest/BUILD.gn").unwrap(), GTEST_BUILD_FILE);
}

#[test]
fn test_generate_quiet_prints_nothing() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["--quiet", "generate", "-i", "conanbuildinfo.json", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    FileAssert::exists(project.project_path().join("out/gtest/BUILD.gn"));
}

#[test]
fn test_generate_max_parallel_one() {
    let project = TestProject::new().unwrap();
    project.write_sample_build_info().unwrap();

    project
        .gngen()
        .args(["generate", "-i", "conanbuildinfo.json", "-o", "out", "--max-parallel", "1"])
        .assert()
        .success();

    FileAssert::exists(project.project_path().join("out/zlib/BUILD.gn"));
}
