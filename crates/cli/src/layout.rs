// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository layout the report is generated from.
//!
//! All paths are relative to the repo root found by [`crate::discovery`].

use std::path::{Path, PathBuf};

/// File whose presence marks the repo root. Also the CI descriptor.
pub const SENTINEL: &str = "bitrise.yml";

/// Directory holding the integration test sources.
pub const TEST_ROOT: &str = "integrationtests";

/// Glob matched against file names under [`TEST_ROOT`].
pub const TEST_FILE_GLOB: &str = "*_test.go";

/// Documentation file receiving the report, relative to the repo root.
pub const DOC_PATH: &str = "integrationtests/PARALLEL_POC.md";

/// Line opening the generated region.
pub const START_MARKER: &str = "<!-- SEQ_REPORT_START -->";

/// Line closing the generated region.
pub const END_MARKER: &str = "<!-- SEQ_REPORT_END -->";

/// Command shown in the report for regenerating it.
pub const REGENERATE_COMMAND: &str = "cargo run -p seq-report";

/// Resolved locations for one repo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The CI descriptor (`bitrise.yml`).
    pub fn descriptor(&self) -> PathBuf {
        self.root.join(SENTINEL)
    }

    pub fn test_root(&self) -> PathBuf {
        self.root.join(TEST_ROOT)
    }

    pub fn doc(&self) -> PathBuf {
        self.root.join(DOC_PATH)
    }
}
