//! Per-file outcomes and run summaries.
//!
//! Every decision the pipeline takes about a path (included, merged, skipped)
//! is recorded in a [`Ledger`]. The ledger drives verbose output, warnings and
//! the final summary, so skip sites never print anything themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::utils::format_file_size;

/// Why a path was left out of the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SkipReason {
    /// The path does not exist or cannot be read.
    NotFound,
    /// The PDF library could not parse the file.
    CorruptDocument {
        /// Message from the PDF library.
        details: String,
    },
    /// A directory input contained no PDF files.
    EmptyDirectory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "path not found"),
            Self::CorruptDocument { details } => write!(f, "cannot read PDF ({details})"),
            Self::EmptyDirectory => write!(f, "no PDFs found in directory"),
        }
    }
}

/// Pipeline stage at which an outcome was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Input expansion and validation.
    Discovery,
    /// Page concatenation.
    Merge,
}

/// What happened to a single path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum FileOutcome {
    /// Passed validation and queued for merging.
    Accepted,
    /// All pages appended to the output.
    Merged {
        /// Pages contributed by this file.
        pages: usize,
    },
    /// Left out of the output.
    Skipped {
        /// Stage that rejected the file.
        stage: Stage,
        /// Reason for rejection.
        reason: SkipReason,
    },
}

/// A `(path, outcome)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Path the outcome applies to.
    pub path: PathBuf,
    /// The outcome.
    pub outcome: FileOutcome,
}

impl FileRecord {
    /// Whether this record is a skip.
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FileOutcome::Skipped { .. })
    }

    /// Skip reason, if this record is a skip.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.outcome {
            FileOutcome::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Ordered accumulator of file records for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<FileRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file that passed validation.
    pub fn accept(&mut self, path: impl Into<PathBuf>) {
        self.push(path.into(), FileOutcome::Accepted);
    }

    /// Record a file whose pages were appended.
    pub fn merged(&mut self, path: impl Into<PathBuf>, pages: usize) {
        self.push(path.into(), FileOutcome::Merged { pages });
    }

    /// Record a skipped path.
    pub fn skip(&mut self, path: impl Into<PathBuf>, stage: Stage, reason: SkipReason) {
        self.push(path.into(), FileOutcome::Skipped { stage, reason });
    }

    fn push(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.records.push(FileRecord { path, outcome });
    }

    /// Append every record from another ledger, keeping order.
    pub fn extend(&mut self, other: Ledger) {
        self.records.extend(other.records);
    }

    /// All records in the order they were made.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Records of skipped paths.
    pub fn skipped(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.is_skipped())
    }

    /// Number of skipped paths.
    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    /// Number of merged files.
    pub fn merged_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Merged { .. }))
            .count()
    }

    /// Consume the ledger and return the skipped records.
    pub fn into_skipped(self) -> Vec<FileRecord> {
        self.records.into_iter().filter(|r| r.is_skipped()).collect()
    }
}

/// What a dry run would do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunPlan {
    /// Files that would be merged, in order.
    pub files: Vec<PathBuf>,
    /// Where the output would be written.
    pub output: PathBuf,
    /// Paths skipped during discovery.
    pub skipped: Vec<FileRecord>,
}

/// Result of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    /// Final output path.
    pub output: PathBuf,
    /// Number of files merged.
    pub files_merged: usize,
    /// Total pages in the output.
    pub total_pages: usize,
    /// Size of the written file in bytes.
    pub output_size: u64,
    /// Paths skipped at discovery or merge time.
    pub skipped: Vec<FileRecord>,
}

impl MergeSummary {
    /// Number of skipped paths.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Output size as a human-readable string.
    pub fn format_output_size(&self) -> String {
        format_file_size(self.output_size)
    }

    /// File name of the output, for short messages.
    pub fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum RunOutcome {
    /// Nothing was written.
    DryRun(DryRunPlan),
    /// The output file was written.
    Merged(MergeSummary),
}

impl RunOutcome {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
