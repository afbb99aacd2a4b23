// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential integration test report generator.
//!
//! Reads the `sequential_re` list from `bitrise.yml`, finds where each
//! listed test is defined under `integrationtests/`, and rewrites the
//! report section of `integrationtests/PARALLEL_POC.md`.

pub mod cli;
pub mod discovery;
pub mod doc;
pub mod error;
pub mod extract;
pub mod layout;
pub mod mapper;
pub mod report;
pub mod tally;
pub mod walker;


pub use error::{Error, Result};
