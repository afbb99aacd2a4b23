// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repo root discovery.
//!
//! Walks from a start directory up through its ancestors looking for the
//! sentinel file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::SENTINEL;

/// Find the nearest directory at or above `start` containing `bitrise.yml`.
pub fn find_root(start: &Path) -> Result<PathBuf> {
    find_ancestor(start, |dir| dir.join(SENTINEL).is_file()).ok_or_else(|| Error::RootNotFound {
        start: start.to_path_buf(),
        sentinel: SENTINEL,
    })
}

/// Return the first of `start` and its ancestors, nearest first, that
/// satisfies `is_root`.
pub fn find_ancestor(start: &Path, is_root: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start.ancestors().find(|dir| is_root(dir)).map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
