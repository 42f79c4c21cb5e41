// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use fsmatrix::cli::ReportArgs;
use fsmatrix::defs::ReportDefs;
use fsmatrix::error::ExitCode;
use fsmatrix::report::{self, ReportInputs};
use fsmatrix::search::TreeSearch;
use fsmatrix::{git, matrix, metadata};

/// Run the report command.
pub fn run(args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let defs = ReportDefs::load(&args.defs)?;
    let matrix = matrix::gather(&args.results)?;
    info!(
        tests = matrix.tests().count(),
        backends = matrix.backends().count(),
        "gathered results"
    );

    let search = TreeSearch::new(&args.source);
    let metadata = metadata::extract_all(&search, matrix.tests())?;

    let revision = git::resolve_revision(&args.source)
        .context("failed to resolve source revision for deep links")?;

    let inputs = ReportInputs {
        matrix: &matrix,
        metadata: &metadata,
        defs: &defs,
        revision: &revision,
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::render(&mut handle, &inputs)?;
    handle.flush()?;

    Ok(ExitCode::Success)
}
