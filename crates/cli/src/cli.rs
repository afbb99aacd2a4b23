// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Regenerate the sequential test report in integrationtests/PARALLEL_POC.md
#[derive(Parser, Debug)]
#[command(name = "seq-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to start the repo root search from [default: current directory]
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Fail if the report in the documentation file is out of date
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the report instead of updating the documentation file
    #[arg(long)]
    pub stdout: bool,

    /// Output format for --stdout
    #[arg(long, default_value = "markdown", requires = "stdout")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// What a run does with the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite the marker region of the documentation file.
    Update,
    /// Compare the marker region with the rendered report.
    Check,
    /// Write the report to stdout.
    Print(OutputFormat),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.stdout {
            Mode::Print(self.format)
        } else {
            Mode::Update
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
