//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfburger::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{PdfBurgerError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader that maps library failures onto per-file errors.
///
/// Documents without pages are rejected as corrupt; they contribute nothing
/// to a merge.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`PdfBurgerError::FileNotFound`] if the path is not a readable file
    /// - [`PdfBurgerError::CorruptDocument`] if the library cannot parse it, or
    ///   it has no pages
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let metadata = std::fs::metadata(path)
            .ok()
            .filter(|m| m.is_file())
            .ok_or_else(|| PdfBurgerError::file_not_found(path))?;

        let start = Instant::now();
        let document = Document::load(path)
            .map_err(|e| PdfBurgerError::corrupt_document(path, e.to_string()))?;

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfBurgerError::corrupt_document(path, "PDF has no pages"));
        }

        let load_time = start.elapsed();
        tracing::trace!(
            path = %path.display(),
            pages = page_count,
            elapsed_ms = load_time.as_millis() as u64,
            "loaded PDF"
        );

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            file_size: metadata.len(),
        })
    }

    /// Check that a file is a readable PDF and return its page count.
    ///
    /// The document is dropped right away; only the verdict is kept.
    pub fn probe(&self, path: &Path) -> Result<usize> {
        self.load(path).map(|loaded| loaded.page_count)
    }
}
