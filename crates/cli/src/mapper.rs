// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-to-file mapping.
//!
//! Each sequential test is attributed to the test file defining it
//! (`func <Name>(`), then counted by package (first path segment below
//! the test root) and by file.
//!
//! When several files define the same name, the file visited last in walk
//! order owns it. Such re-mappings are logged as warnings.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use aho_corasick::AhoCorasick;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::tally::Tally;
use crate::walker::{FileWalker, package_of};

/// Sequential tests grouped by where they are defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mapping {
    /// Test counts per package.
    pub by_package: Tally,
    /// Test counts per file, relative to the test root.
    pub by_file: Tally,
    /// Tests with no definition in any file, in input order.
    pub missing: Vec<String>,
}

impl Mapping {
    /// Number of tests attributed to a file.
    pub fn mapped(&self) -> usize {
        self.by_file.total()
    }
}

/// Finds `func <Name>(` definitions for a fixed set of names.
pub struct DefinitionMatcher {
    names: Vec<String>,
    automaton: AhoCorasick,
}

impl DefinitionMatcher {
    pub fn new(tests: &[String]) -> Result<Self> {
        let mut seen = HashSet::new();
        let names: Vec<String> =
            tests.iter().filter(|name| seen.insert(name.as_str())).cloned().collect();
        let patterns: Vec<String> = names.iter().map(|name| format!("func {name}(")).collect();
        let automaton = AhoCorasick::new(&patterns)?;
        Ok(Self { names, automaton })
    }

    /// Names defined in `text`, each reported once, in order of first definition.
    pub fn defined_in(&self, text: &str) -> Vec<&str> {
        let mut found = vec![false; self.names.len()];
        let mut names = Vec::new();
        for m in self.automaton.find_overlapping_iter(text) {
            let idx = m.pattern().as_usize();
            if !found[idx] {
                found[idx] = true;
                names.push(self.names[idx].as_str());
            }
        }
        names
    }
}

/// Map `tests` to the `*_test.go` files under `test_root` defining them.
pub fn map_tests_to_files(test_root: &Path, tests: &[String]) -> Result<Mapping> {
    let walker = FileWalker::new()?;
    let matcher = DefinitionMatcher::new(tests)?;
    let mut owners: HashMap<String, String> = HashMap::new();

    for file in walker.walk(test_root)? {
        let text = std::fs::read_to_string(&file.path).map_err(|e| Error::io(&file.path, e))?;
        for name in matcher.defined_in(&text) {
            tracing::debug!("{} defined in {}", name, file.relative);
            if let Some(previous) = owners.insert(name.to_string(), file.relative.clone()) {
                tracing::warn!(
                    "{} is defined in both {} and {}; counting the latter",
                    name,
                    previous,
                    file.relative
                );
            }
        }
    }

    Ok(aggregate(tests, &owners))
}

/// Count `tests` by owning package and file. Unowned tests are missing.
pub fn aggregate(tests: &[String], owners: &HashMap<String, String>) -> Mapping {
    let mut mapping = Mapping::default();
    for name in tests {
        match owners.get(name) {
            Some(relative) => {
                mapping.by_package.increment(package_of(relative));
                mapping.by_file.increment(relative);
            }
            None => mapping.missing.push(name.clone()),
        }
    }
    mapping
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
