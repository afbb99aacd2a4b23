// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! The Markdown output is what lands between the markers of the
//! documentation file. JSON is available for tooling via `--stdout`.

mod json;
mod markdown;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::mapper::Mapping;

pub use json::JsonFormatter;
pub use markdown::{MarkdownFormatter, render_markdown};

/// Everything a report is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Sequential tests as listed in the CI descriptor.
    pub tests: Vec<String>,

    #[serde(flatten)]
    pub mapping: Mapping,
}

/// Trait for formatting a report into an output format.
pub trait ReportFormatter {
    fn format(&self, report: &Report) -> anyhow::Result<String>;
}

/// Format `report` in the requested output format.
pub fn format_report(format: OutputFormat, report: &Report) -> anyhow::Result<String> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
