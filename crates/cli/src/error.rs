// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for report generation.
//!
//! Every variant is fatal. Tests that cannot be located are reported
//! as data (see [`crate::mapper::Mapping::missing`]), not as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating the report.
#[derive(Error, Debug)]
pub enum Error {
    /// No ancestor of the start directory contains the sentinel file.
    #[error("could not find repo root ({sentinel}) from '{}'", start.display())]
    RootNotFound { start: PathBuf, sentinel: &'static str },

    /// The documentation file lacks one or both report markers.
    #[error("missing {} marker(s) in '{}'", missing.join(" and "), path.display())]
    MarkersMissing { path: PathBuf, missing: Vec<&'static str> },

    /// Reading or writing a file failed.
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk test sources: {0}")]
    Walk(#[from] ignore::Error),

    /// The test file glob could not be compiled.
    #[error("invalid test file pattern: {0}")]
    Glob(#[from] globset::Error),

    /// The function definition matcher could not be built.
    #[error("failed to build test name matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

impl Error {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
