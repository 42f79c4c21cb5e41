// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aggregates filesystem test-suite run logs into conformance reports
#[derive(Parser)]
#[command(name = "fsmatrix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the test x backend result matrix as CSV
    Csv(CsvArgs),
    /// Print the full Markdown conformance report
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct CsvArgs {
    /// Directory of run logs, one JSON-lines file per backend
    #[arg(value_name = "RESULTS_DIR")]
    pub results: PathBuf,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Report-definition document (TOML: prelude, repo, topics)
    #[arg(value_name = "DEFS")]
    pub defs: PathBuf,

    /// Directory of run logs, one JSON-lines file per backend
    #[arg(value_name = "RESULTS_DIR")]
    pub results: PathBuf,

    /// Test-suite source root searched for test declarations
    #[arg(long, default_value = "src/tests", value_name = "DIR")]
    pub source: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
