// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test source discovery.
//!
//! Walks the test root with the `ignore` crate and yields every file whose
//! name matches `*_test.go`. Standard filters are off so hidden and
//! git-ignored files are visited like any other. Entries are sorted by
//! file name, which fixes the walk order across platforms.

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::Result;
use crate::layout::TEST_FILE_GLOB;

/// A test source file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Absolute path (as joined from the walk root).
    pub path: PathBuf,

    /// Path relative to the walk root, `/`-separated.
    pub relative: String,
}

/// Package of a `/`-separated path relative to the test root: its first segment.
pub fn package_of(relative: &str) -> &str {
    relative.split('/').next().unwrap_or(relative)
}

/// Walker for `*_test.go` files.
pub struct FileWalker {
    matcher: GlobMatcher,
}

impl FileWalker {
    pub fn new() -> Result<Self> {
        let matcher = Glob::new(TEST_FILE_GLOB)?.compile_matcher();
        Ok(Self { matcher })
    }

    /// Collect matching files under `root` in walk order.
    ///
    /// Symlinks to regular files are included; symlinked directories are
    /// not descended into. A missing root yields no files. Traversal
    /// errors are returned.
    pub fn walk(&self, root: &Path) -> Result<Vec<WalkedFile>> {
        if !root.is_dir() {
            tracing::warn!("test root {} does not exist", root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                Some(ft) if ft.is_symlink() => entry.path().is_file(),
                _ => false,
            };
            if !is_file || !self.matcher.is_match(entry.file_name()) {
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative = relative_path(root, &path);
            tracing::debug!("test file: {}", relative);
            files.push(WalkedFile { path, relative });
        }

        Ok(files)
    }
}

/// Render `path` relative to `root` with `/` separators.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
