//! PDF writing and saving operations.
//!
//! Output is always written atomically: the document is serialized into a
//! temporary file next to the target, flushed, and then renamed over the
//! target. If anything fails the temporary file is removed, so the target is
//! either complete or untouched.
//!
//! # Examples
//!
//! ```no_run
//! use pdfburger::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&mut doc, Path::new("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

use crate::error::{PdfBurgerError, Result};
use crate::utils::format_file_size;

/// Capacity of the buffer between the serializer and the temporary file.
const BUFFER_SIZE: usize = 64 * 1024;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Writes documents to disk atomically.
///
/// Streams are written as they are; the writer never re-encodes content.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - The temporary file cannot be created
    /// - Serialization, flushing or the final rename fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    pub fn save_with_stats(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !parent.exists() {
            tracing::debug!(dir = %parent.display(), "creating output directory");
            std::fs::create_dir_all(&parent).map_err(|e| PdfBurgerError::FailedToCreateOutput {
                path: parent.clone(),
                source: e,
            })?;
        }

        // Dropping the handle before `persist` deletes the file.
        let temp = NamedTempFile::new_in(&parent).map_err(|e| {
            PdfBurgerError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        {
            let mut writer = BufWriter::with_capacity(BUFFER_SIZE, temp.as_file());

            doc.save_to(&mut writer)
                .map_err(|e| PdfBurgerError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: std::io::Error::other(e),
                })?;

            writer.flush().map_err(|e| PdfBurgerError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| PdfBurgerError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            })?;

        let file = temp.persist(path).map_err(|e| PdfBurgerError::FailedToWrite {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);
        let write_time = start.elapsed();

        tracing::debug!(
            path = %path.display(),
            bytes = file_size,
            elapsed_ms = write_time.as_millis() as u64,
            "wrote output"
        );

        Ok(WriteStatistics {
            write_time,
            file_size,
            output_path: path.to_path_buf(),
        })
    }
}
