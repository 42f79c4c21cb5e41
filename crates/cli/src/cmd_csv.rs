// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Csv command implementation.

use std::io::Write;

use fsmatrix::cli::CsvArgs;
use fsmatrix::error::ExitCode;
use fsmatrix::matrix;

/// Run the csv command.
pub fn run(args: &CsvArgs) -> anyhow::Result<ExitCode> {
    let matrix = matrix::gather(&args.results)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    fsmatrix::csv::write_csv(&mut handle, &matrix)?;
    handle.flush()?;

    Ok(ExitCode::Success)
}
