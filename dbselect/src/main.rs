//! Table selection tool for change-data-capture connectors.
//!
//! Builds a selector from include/exclude lists given as flags, environment
//! variables or a JSON file, and reports which tables it selects.

use clap::Parser;
use dbselect::{Cli, Command, run_check, run_filter, run_show};
use dbselect_core::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command; `Ok(false)` means some input was rejected.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let selector = cli.selector.build_selector()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match &cli.command {
        Command::Check { ids } => run_check(&selector, ids, &mut out)?,
        Command::Filter => {
            run_filter(&selector, io::stdin().lock(), &mut out)?;
            true
        }
        Command::Show { json } => {
            run_show(&selector, *json, &mut out)?;
            true
        }
    };

    out.flush()?;
    Ok(ok)
}
