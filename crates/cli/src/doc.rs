// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker-delimited report region in the documentation file.
//!
//! The region is everything strictly between the start and end markers.
//! Splicing replaces the region wholesale and leaves the rest of the
//! document byte-for-byte intact.

use std::path::Path;

use crate::error::{Error, Result};
use crate::layout::{END_MARKER, START_MARKER};

/// Replace the marker region of `doc` with `report`.
///
/// Splits at the first start marker and the first end marker after it.
/// On failure returns the markers that could not be found.
pub fn splice(doc: &str, report: &str) -> std::result::Result<String, Vec<&'static str>> {
    let Some((before, rest)) = doc.split_once(START_MARKER) else {
        let mut missing = vec![START_MARKER];
        if !doc.contains(END_MARKER) {
            missing.push(END_MARKER);
        }
        return Err(missing);
    };
    let Some((_, after)) = rest.split_once(END_MARKER) else {
        return Err(vec![END_MARKER]);
    };

    let mut output =
        String::with_capacity(before.len() + START_MARKER.len() + report.len() + rest.len() + 1);
    output.push_str(before);
    output.push_str(START_MARKER);
    output.push('\n');
    output.push_str(report);
    output.push_str(END_MARKER);
    output.push_str(after);
    Ok(output)
}

/// Read `path` and splice `report` into it without writing.
fn read_spliced(path: &Path, report: &str) -> Result<(String, String)> {
    let current = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let updated = splice(&current, report)
        .map_err(|missing| Error::MarkersMissing { path: path.to_path_buf(), missing })?;
    Ok((current, updated))
}

/// Rewrite the report region of the document at `path`.
///
/// Returns whether the document changed. Nothing is written when the
/// markers are missing or the content is already current.
pub fn update_doc(path: &Path, report: &str) -> Result<bool> {
    let (current, updated) = read_spliced(path, report)?;
    if current == updated {
        tracing::debug!("{} is up to date", path.display());
        return Ok(false);
    }
    std::fs::write(path, updated).map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// Whether the report region of the document at `path` already holds `report`.
pub fn is_current(path: &Path, report: &str) -> Result<bool> {
    let (current, updated) = read_spliced(path, report)?;
    Ok(current == updated)
}

#[cfg(test)]
#[path = "doc_tests.rs"]
mod tests;
