//! PDF merging operations.
//!
//! [`Merger`] concatenates the pages of an ordered file list into one
//! document. Progress is reported through a [`MergeObserver`] so the library
//! never writes to the terminal itself.
//!
//! # Examples
//!
//! ```no_run
//! use pdfburger::merge::{Merger, NoopObserver};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let files = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let result = Merger::new().merge(&files, &mut NoopObserver)?;
//! println!("Merged {} pages", result.statistics.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;

pub use merger::{MergeStatistics, MergedDocument, Merger};

use std::path::Path;

use crate::report::{FileRecord, SkipReason};

/// Receives per-file events while a run progresses.
///
/// All methods default to doing nothing.
pub trait MergeObserver {
    /// An input was left out during discovery.
    fn input_skipped(&mut self, _record: &FileRecord) {}

    /// Called once before the first file, with the number of files queued.
    fn merge_started(&mut self, _total: usize) {}

    /// A file's pages were appended.
    fn file_merged(&mut self, _index: usize, _path: &Path, _pages: usize) {}

    /// A file was left out.
    fn file_skipped(&mut self, _index: usize, _path: &Path, _reason: &SkipReason) {}

    /// Called once after the last file, whether or not anything merged.
    fn merge_finished(&mut self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}
