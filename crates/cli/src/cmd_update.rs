// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report regeneration pipeline.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;

use seq_report::cli::{Cli, Mode, OutputFormat};
use seq_report::layout::{Layout, REGENERATE_COMMAND};
use seq_report::report::{self, Report};
use seq_report::{discovery, doc, extract, mapper};

/// Run the pipeline: locate root, extract, map, render, then update,
/// check, or print depending on the mode.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let start = match &cli.root {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let start = std::fs::canonicalize(&start)
        .with_context(|| format!("failed to resolve {}", start.display()))?;

    let layout = Layout::new(discovery::find_root(&start)?);
    tracing::debug!("repo root: {}", layout.root().display());

    let tests = extract::read_sequential_tests(&layout.descriptor())?;
    let mapping = mapper::map_tests_to_files(&layout.test_root(), &tests)
        .context("failed to map sequential tests to files")?;
    tracing::debug!(
        "{} sequential tests, {} mapped, {} unmapped",
        tests.len(),
        mapping.mapped(),
        mapping.missing.len()
    );
    let report = Report { tests, mapping };

    let doc_path = layout.doc();
    match cli.mode() {
        Mode::Update => {
            let rendered = report::format_report(OutputFormat::Markdown, &report)?;
            if doc::update_doc(&doc_path, &rendered)? {
                tracing::info!("updated {}", doc_path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Mode::Check => {
            let rendered = report::format_report(OutputFormat::Markdown, &report)?;
            if doc::is_current(&doc_path, &rendered)? {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!(
                    "{} is out of date; run `{}` to regenerate it",
                    doc_path.display(),
                    REGENERATE_COMMAND
                );
                Ok(ExitCode::FAILURE)
            }
        }
        Mode::Print(format) => {
            let rendered = report::format_report(format, &report)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
