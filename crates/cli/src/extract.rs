// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential test extraction from the CI descriptor.
//!
//! `bitrise.yml` builds the sequential test regex one entry at a time:
//!
//! ```text
//! sequential_re+="TestA|"
//! sequential_re+="TestB|"
//! sequential_re+="TestC"
//! ```
//!
//! Piped entries are collected in order, then the last unpiped entry is
//! appended. The descriptor is matched textually, not parsed as YAML.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// A `sequential_re+="Test...|"` entry.
const PIPED_PATTERN: &str = r#"sequential_re\+="(Test[^"]+?)\|""#;

/// A `sequential_re+="Test..."` entry with no trailing pipe.
const FINAL_PATTERN: &str = r#"sequential_re\+="(Test[^"|]+)""#;

#[allow(clippy::expect_used)]
static PIPED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PIPED_PATTERN).expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static FINAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FINAL_PATTERN).expect("valid regex pattern"));

/// Extract sequential test names from descriptor text.
///
/// Returns piped entries in order of appearance followed by the last
/// unpiped entry, if any. Duplicates are kept.
pub fn sequential_tests(descriptor: &str) -> Vec<String> {
    let mut tests: Vec<String> =
        PIPED_REGEX.captures_iter(descriptor).map(|cap| cap[1].to_string()).collect();

    if let Some(last) = FINAL_REGEX.captures_iter(descriptor).last() {
        tests.push(last[1].to_string());
    }

    tests
}

/// Read the descriptor at `path` and extract its sequential test names.
pub fn read_sequential_tests(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let tests = sequential_tests(&content);
    tracing::debug!("{} sequential tests listed in {}", tests.len(), path.display());
    Ok(tests)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
