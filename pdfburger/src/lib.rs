//! pdfburger - Concatenate PDF files and folders of PDFs into one document.
//!
//! Inputs are merged in the order given. Directories expand to the PDFs they
//! contain in natural order (`2.pdf` before `10.pdf`), optionally recursing
//! into subdirectories. Files that are missing or unreadable are skipped with
//! a warning instead of failing the run.
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use pdfburger::Config;
//! use pdfburger::merge::NoopObserver;
//! use pdfburger::report::RunOutcome;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(vec![PathBuf::from("cover.pdf"), PathBuf::from("chapters/")])
//!     .with_output("book.pdf");
//!
//! if let RunOutcome::Merged(summary) = pdfburger::run(&config, &mut NoopObserver)? {
//!     println!("{} pages -> {}", summary.total_pages, summary.output.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfburger::expand::InputExpander;
//! use pdfburger::merge::{Merger, NoopObserver};
//! use pdfburger::io::PdfWriter;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let expansion = InputExpander::new(true).expand(&[PathBuf::from("scans")], Path::new("."))?;
//! let mut merged = Merger::new().merge(&expansion.files, &mut NoopObserver)?;
//! PdfWriter::new().save(&mut merged.document, Path::new("scans.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod expand;
pub mod io;
pub mod merge;
pub mod output;
pub mod report;
pub mod sort;
pub mod target;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{PdfBurgerError, Result};
pub use report::RunOutcome;

use expand::InputExpander;
use io::PdfWriter;
use merge::{MergeObserver, MergedDocument, Merger};
use report::{DryRunPlan, MergeSummary};
use target::OutputResolver;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run one invocation: expand inputs, resolve the output, then either plan
/// (dry run) or merge and write.
///
/// Skipped inputs are reported to `observer` as they are found and are
/// listed in the returned outcome.
///
/// # Errors
///
/// - [`PdfBurgerError::InvalidConfig`] if `config` does not validate
/// - [`PdfBurgerError::NoInputFiles`] if no readable PDF was found
/// - [`PdfBurgerError::OutputExists`] if an explicit output exists and
///   overwriting was not allowed; nothing has been merged at that point
/// - [`PdfBurgerError::MergeProducedEmptyOutput`] if every file failed to
///   merge; nothing is written
/// - I/O errors while writing the output; no partial file is left behind
pub fn run(config: &Config, observer: &mut dyn MergeObserver) -> Result<RunOutcome> {
    config.validate()?;
    let base = config.working_dir.as_path();

    let expansion = InputExpander::new(config.recursive).collect(config.inputs(), base)?;
    for record in expansion.ledger.skipped() {
        observer.input_skipped(record);
    }
    expansion.require_files()?;

    let target = OutputResolver::new(base)
        .overwrite(config.overwrite)
        .dry_run(config.dry_run)
        .resolve(config.output.as_deref(), &expansion.inputs)?;

    if config.dry_run {
        tracing::debug!(files = expansion.files.len(), output = %target.path.display(), "dry run");
        return Ok(RunOutcome::DryRun(DryRunPlan {
            files: expansion.files,
            output: target.path,
            skipped: expansion.ledger.into_skipped(),
        }));
    }

    let MergedDocument {
        mut document,
        statistics,
        ledger,
    } = Merger::new().merge(&expansion.files, observer)?;

    let written = PdfWriter::new().save_with_stats(&mut document, &target.path)?;

    tracing::debug!(
        files = statistics.files_merged,
        skipped = statistics.files_skipped,
        pages = statistics.total_pages,
        input_size = %statistics.format_input_size(),
        output_size = %written.format_file_size(),
        merge_ms = statistics.merge_time.as_millis() as u64,
        write_ms = written.write_time.as_millis() as u64,
        "merge complete"
    );

    let mut records = expansion.ledger;
    records.extend(ledger);

    Ok(RunOutcome::Merged(MergeSummary {
        output: written.output_path,
        files_merged: statistics.files_merged,
        total_pages: statistics.total_pages,
        output_size: written.file_size,
        skipped: records.into_skipped(),
    }))
}
