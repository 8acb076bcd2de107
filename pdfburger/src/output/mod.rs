//! Output formatting and display for pdfburger.
//!
//! This module handles all user-facing output including:
//! - Warnings for skipped inputs
//! - The dry-run file listing
//! - The merge summary
//! - A progress bar for long merges
//!
//! # Examples
//!
//! ```no_run
//! use pdfburger::output::{ConsoleObserver, OutputFormatter};
//! use pdfburger::config::Config;
//!
//! # fn example(config: Config) -> Result<(), Box<dyn std::error::Error>> {
//! let formatter = OutputFormatter::from_config(&config);
//! let mut observer = ConsoleObserver::new(&formatter);
//! let outcome = pdfburger::run(&config, &mut observer)?;
//! pdfburger::output::display_outcome(&formatter, &outcome);
//! # Ok(())
//! # }
//! ```

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::ProgressBar;

use std::path::Path;

use crate::merge::MergeObserver;
use crate::report::{DryRunPlan, FileRecord, MergeSummary, RunOutcome, SkipReason};

/// Merges with more files than this show a progress bar.
pub const PROGRESS_THRESHOLD: usize = 5;

/// One-line warning text for a skipped path.
pub fn skip_message(path: &Path, reason: &SkipReason) -> String {
    match reason {
        SkipReason::NotFound => format!("path not found: {}", path.display()),
        SkipReason::CorruptDocument { details } => {
            format!("cannot read PDF: {} ({details})", path.display())
        }
        SkipReason::EmptyDirectory => format!("no PDFs found in directory: {}", path.display()),
    }
}

/// Print the files a dry run would merge.
pub fn display_plan(formatter: &OutputFormatter, plan: &DryRunPlan) {
    formatter.info(&format!("target files ({}):", plan.files.len()));
    for (index, file) in plan.files.iter().enumerate() {
        formatter.list_item(index + 1, &file.display().to_string());
    }
    formatter.info(&format!("output: {}", plan.output.display()));
}

/// Print the result of a completed merge.
pub fn display_summary(formatter: &OutputFormatter, summary: &MergeSummary) {
    formatter.success(&format!(
        "merged {} PDFs ({} pages) -> {}",
        summary.files_merged,
        summary.total_pages,
        summary.output_name()
    ));
    formatter.detail("output", &summary.output.display().to_string());
    formatter.detail("size", &summary.format_output_size());
    if summary.skipped_count() > 0 {
        formatter.detail("skipped", &summary.skipped_count().to_string());
    }
}

/// Print either outcome.
pub fn display_outcome(formatter: &OutputFormatter, outcome: &RunOutcome) {
    match outcome {
        RunOutcome::DryRun(plan) => display_plan(formatter, plan),
        RunOutcome::Merged(summary) => display_summary(formatter, summary),
    }
}

/// Reports run events on the terminal.
///
/// Skips become warnings as they happen; merged files are listed in verbose
/// mode. Otherwise a progress bar is drawn for merges of more than
/// [`PROGRESS_THRESHOLD`] files.
#[derive(Debug)]
pub struct ConsoleObserver<'a> {
    formatter: &'a OutputFormatter,
    progress: Option<ProgressBar>,
}

impl<'a> ConsoleObserver<'a> {
    /// Create an observer printing through `formatter`.
    pub fn new(formatter: &'a OutputFormatter) -> Self {
        Self {
            formatter,
            progress: None,
        }
    }

    fn warn(&self, message: &str) {
        if let Some(progress) = &self.progress {
            progress.clear();
        }
        self.formatter.warning(message);
    }

    fn wants_progress(&self, total: usize) -> bool {
        total > PROGRESS_THRESHOLD && !self.formatter.is_verbose() && !self.formatter.is_quiet()
    }
}

impl MergeObserver for ConsoleObserver<'_> {
    fn input_skipped(&mut self, record: &FileRecord) {
        if let Some(reason) = record.skip_reason() {
            self.warn(&skip_message(&record.path, reason));
        }
    }

    fn merge_started(&mut self, total: usize) {
        if self.wants_progress(total) {
            let mut progress = ProgressBar::new(total);
            progress.set_message("merging");
            self.progress = Some(progress).filter(ProgressBar::is_enabled);
        }
    }

    fn file_merged(&mut self, _index: usize, path: &Path, pages: usize) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.formatter
            .debug(&format!("adding: {name} ({pages} pages)"));

        if let Some(progress) = self.progress.as_mut() {
            progress.increment();
        }
    }

    fn file_skipped(&mut self, _index: usize, path: &Path, reason: &SkipReason) {
        self.warn(&skip_message(path, reason));

        if let Some(progress) = self.progress.as_mut() {
            progress.increment();
        }
    }

    fn merge_finished(&mut self) {
        if let Some(mut progress) = self.progress.take() {
            progress.finish();
        }
    }
}
