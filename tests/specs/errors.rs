//! Behavioral specs for fatal errors.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Missing end marker aborts before writing.
#[test]
fn missing_end_marker_fails_and_leaves_file() {
    let doc = "# Parallel POC\n\n<!-- SEQ_REPORT_START -->\nold\n";
    let repo = Repo::new(&[
        ("bitrise.yml", "sequential_re+=\"TestA\"\n"),
        ("integrationtests/pkgX/a_test.go", "func TestA(t *testing.T) {}\n"),
        ("integrationtests/PARALLEL_POC.md", doc),
    ]);

    repo.cmd()
        .assert()
        .failure()
        .stderr(predicates::str::contains("SEQ_REPORT_END"));

    assert_eq!(repo.doc(), doc);
}

/// Missing both markers names both.
#[test]
fn missing_markers_are_named() {
    let repo = Repo::new(&[
        ("bitrise.yml", ""),
        ("integrationtests/PARALLEL_POC.md", "# no markers\n"),
    ]);

    repo.cmd().assert().failure().stderr(
        predicates::str::contains("SEQ_REPORT_START").and(predicates::str::contains("SEQ_REPORT_END")),
    );
}

/// Missing documentation file is an I/O error.
#[test]
fn missing_document_fails() {
    let repo = Repo::new(&[("bitrise.yml", "")]);

    repo.cmd()
        .assert()
        .failure()
        .stderr(predicates::str::contains("PARALLEL_POC.md"));
}

/// No bitrise.yml in any ancestor of the start directory.
#[test]
fn missing_root_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    // Only meaningful when nothing above the temp dir is a repo root.
    let has_sentinel_above = dir.path().ancestors().any(|p| p.join("bitrise.yml").is_file());
    if has_sentinel_above {
        return;
    }

    seq_report_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("could not find repo root"));
}

/// A nonexistent --root path is reported.
#[test]
fn nonexistent_root_flag_fails() {
    seq_report_cmd()
        .args(["--root", "/nonexistent/seq-report/root"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to resolve"));
}
