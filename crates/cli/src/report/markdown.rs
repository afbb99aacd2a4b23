// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown report output.

use std::fmt::Write;

use crate::layout::{REGENERATE_COMMAND, TEST_FILE_GLOB, TEST_ROOT};
use crate::mapper::Mapping;

use super::{Report, ReportFormatter};

/// Markdown report formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> anyhow::Result<String> {
        Ok(render_markdown(&report.mapping)?)
    }
}

/// Render the report section. Always ends with a newline.
pub fn render_markdown(mapping: &Mapping) -> Result<String, std::fmt::Error> {
    let mut output = String::with_capacity(1024);

    writeln!(output, "## Where sequential tests concentrate")?;
    writeln!(output)?;
    writeln!(output, "- Regenerate: `{REGENERATE_COMMAND}`")?;
    writeln!(output)?;

    writeln!(output, "- By subpackage (count of sequential tests):")?;
    for (name, count) in mapping.by_package.most_common() {
        writeln!(output, "  - `{name}`: {count}")?;
    }

    writeln!(output, "- By file (count of sequential tests):")?;
    for (name, count) in mapping.by_file.most_common() {
        writeln!(output, "  - `{TEST_ROOT}/{name}`: {count}")?;
    }

    if !mapping.missing.is_empty() {
        writeln!(output, "- Unmapped tests (not found in {TEST_FILE_GLOB}):")?;
        for name in &mapping.missing {
            writeln!(output, "  - `{name}`")?;
        }
    }

    Ok(output)
}
