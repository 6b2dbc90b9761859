//! Error handling integration tests

mod common;

use common::{CSV_FILE, TestRepo};
use predicates::prelude::*;

#[test]
fn test_missing_template() {
    let repo = TestRepo::new();
    std::fs::remove_dir_all(repo.path.join("bundle")).unwrap();

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template bundle not found"));

    assert!(!repo.bundle_dir("1.0.0").exists());
}

#[test]
fn test_template_without_tests_dir() {
    let repo = TestRepo::new();
    std::fs::remove_dir_all(repo.path.join("bundle/tests")).unwrap();

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tests directory"));
}

#[test]
fn test_missing_csv() {
    let repo = TestRepo::new();
    std::fs::remove_file(repo.path.join("bundle/manifests").join(CSV_FILE)).unwrap();

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("clusterserviceversion.yaml"));
}

#[test]
fn test_ambiguous_csv() {
    let repo = TestRepo::new();
    repo.write_file(
        "bundle/manifests/old.clusterserviceversion.yaml",
        common::TEMPLATE_CSV,
    );

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Multiple cluster service versions"))
        .stderr(predicate::str::contains("old.clusterserviceversion.yaml"));
}

#[test]
fn test_malformed_annotations() {
    let repo = TestRepo::new();
    repo.write_file(
        "bundle/metadata/annotations.yaml",
        "annotations: [unclosed\n",
    );

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"))
        .stderr(predicate::str::contains("annotations.yaml"));
}

#[test]
fn test_csv_without_spec() {
    let repo = TestRepo::new();
    repo.write_file(
        &format!("bundle/manifests/{CSV_FILE}"),
        "metadata:\n  name: x\n  annotations: {}\n",
    );

    repo.create_cmd("1.0.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}
