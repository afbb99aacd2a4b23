//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the seq-report binary
pub fn seq_report_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("seq-report"));
    cmd.env_remove("SEQ_REPORT_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Document with an empty report region.
pub const EMPTY_DOC: &str = "# Parallel POC\n\n<!-- SEQ_REPORT_START -->\n<!-- SEQ_REPORT_END -->\n\nTrailing notes.\n";

/// Temporary repository built from (path, content) pairs.
pub struct Repo {
    dir: TempDir,
}

impl Repo {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(full_path, content).unwrap();
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap()
    }

    pub fn doc(&self) -> String {
        self.read("integrationtests/PARALLEL_POC.md")
    }

    /// Command running from `subdir` of the repo.
    pub fn cmd_in(&self, subdir: &str) -> Command {
        let mut cmd = seq_report_cmd();
        cmd.current_dir(self.path().join(subdir));
        cmd
    }

    pub fn cmd(&self) -> Command {
        self.cmd_in("")
    }
}

/// The repo from the concrete scenario: TestA and TestB in pkgX, TestC in pkgY.
pub fn abc_repo() -> Repo {
    Repo::new(&[
        (
            "bitrise.yml",
            "sequential_re+=\"TestA|\"\nsequential_re+=\"TestB|\"\nsequential_re+=\"TestC\"\n",
        ),
        (
            "integrationtests/pkgX/a_test.go",
            "func TestA(t *testing.T) {}\nfunc TestB(t *testing.T) {}\n",
        ),
        ("integrationtests/pkgY/b_test.go", "func TestC(t *testing.T) {}\n"),
        ("integrationtests/PARALLEL_POC.md", EMPTY_DOC),
    ])
}
