// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fsmatrix CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use fsmatrix::cli::{Cli, Command};
use fsmatrix::error::ExitCode;

mod cmd_csv;
mod cmd_report;

fn init_logging() {
    let filter = EnvFilter::try_from_env("FSMATRIX_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    // clap's default usage-error code is 2; the CLI contract reserves 2 for
    // metadata ambiguity and uses 1 for usage errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::UsageError,
            };
            std::process::exit(code as i32);
        }
    };

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fsmatrix: {}", e);
            match e.downcast_ref::<fsmatrix::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Csv(args) => cmd_csv::run(args),
        Command::Report(args) => cmd_report::run(args),
    }
}
