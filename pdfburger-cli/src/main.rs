//! pdf-burger - Merge PDF files and folders of PDFs into one document.

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use pdfburger::error::PdfBurgerError;
use pdfburger::output::{ConsoleObserver, OutputFormatter, display_outcome};

fn main() -> ExitCode {
    // Parse CLI arguments; clap exits with status 2 on usage errors.
    let cli = Cli::parse();
    logging::init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            OutputFormatter::quiet().error(&format!("{err:#}"));
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Main application logic.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("cannot determine current directory")?;
    let config = cli.to_config(&working_dir);
    tracing::debug!(?config, "starting");

    let formatter = OutputFormatter::from_config(&config);
    let mut observer = ConsoleObserver::new(&formatter);

    let outcome = pdfburger::run(&config, &mut observer)?;

    if config.json {
        println!("{}", outcome.to_json().context("failed to render JSON")?);
    } else {
        display_outcome(&formatter, &outcome);
    }

    Ok(())
}

/// Exit status for a failed run.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PdfBurgerError>()
        .map_or(1, PdfBurgerError::exit_code)
        .clamp(1, 255) as u8
}
