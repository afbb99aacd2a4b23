//! Behavioral specs for `--stdout`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Markdown output matches the region written to the document.
#[test]
fn prints_markdown_report() {
    seq_report_cmd()
        .arg("--stdout")
        .current_dir(fixture("sample-repo"))
        .assert()
        .success()
        .stdout(
            predicates::str::starts_with("## Where sequential tests concentrate\n")
                .and(predicates::str::contains("  - `integrationtests/pkgX/a_test.go`: 2\n"))
                .and(predicates::str::ends_with("  - `TestMissing`\n")),
        );
}

/// JSON output carries the ordered test list, counts, and unmapped tests.
#[test]
fn prints_json_report() {
    let output = seq_report_cmd()
        .args(["--stdout", "--format", "json"])
        .current_dir(fixture("sample-repo"))
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tests"], serde_json::json!(["TestA", "TestB", "TestC", "TestMissing"]));
    assert_eq!(value["by_package"], serde_json::json!([["pkgX", 2], ["pkgY", 1]]));
    assert_eq!(
        value["by_file"],
        serde_json::json!([["pkgX/a_test.go", 2], ["pkgY/b_test.go", 1]])
    );
    assert_eq!(value["missing"], serde_json::json!(["TestMissing"]));
}

/// --stdout leaves the document alone.
#[test]
fn does_not_touch_document() {
    let repo = abc_repo();

    repo.cmd().arg("--stdout").assert().success();

    assert_eq!(repo.doc(), EMPTY_DOC);
}
