//! Error types for pdf-burger.
//!
//! Errors fall into two groups:
//!
//! - **Per-file errors** ([`PdfBurgerError::FileNotFound`],
//!   [`PdfBurgerError::CorruptDocument`]): recovered locally. The file is
//!   recorded in the ledger as skipped and the run continues.
//! - **Fatal errors**: everything else. They stop the run before (or instead
//!   of) writing the output file.
//!
//! I/O variants keep the underlying error as their `source` only; print the
//! chain (`{:#}` with anyhow) to see the cause.

use std::io;
use std::path::PathBuf;

use crate::report::SkipReason;

/// Result type alias for pdf-burger operations.
pub type Result<T> = std::result::Result<T, PdfBurgerError>;

/// Main error type for pdf-burger operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfBurgerError {
    /// Input path does not exist or cannot be read.
    #[error("path not found: {}", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The PDF library could not parse the file, or it has no pages.
    #[error("cannot read PDF: {} ({details})", path.display())]
    CorruptDocument {
        /// Path to the unreadable PDF.
        path: PathBuf,
        /// Message from the PDF library.
        details: String,
    },

    /// Nothing usable was left after expanding the inputs.
    #[error("no PDF files to merge")]
    NoInputFiles,

    /// Explicit output file already exists and overwrite is not allowed.
    #[error("output file already exists: {} (use --overwrite to replace it)", path.display())]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Every candidate file was skipped while merging.
    #[error("none of the input files could be merged; no output written")]
    MergeProducedEmptyOutput,

    /// Failed to create the output file or its directory.
    #[error("failed to create output file: {}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write output file: {}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl PdfBurgerError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CorruptDocument error.
    pub fn corrupt_document(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::CorruptDocument {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Ledger reason for a per-file error, `None` for fatal ones.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::FileNotFound { .. } => Some(SkipReason::NotFound),
            Self::CorruptDocument { details, .. } => Some(SkipReason::CorruptDocument {
                details: details.clone(),
            }),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInputFiles => 1,
            Self::FileNotFound { .. } => 1,
            Self::CorruptDocument { .. } => 1,
            Self::InvalidConfig { .. } => 2,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io(_) => 5,
            Self::MergeProducedEmptyOutput => 6,
        }
    }
}
