//! Core PDF merging implementation.
//!
//! The first document that loads becomes the base. Every later document has
//! its objects renumbered past the base's highest id, moved in, and its leaf
//! pages re-parented under the base page tree root. Objects only reachable
//! from the absorbed catalogs are pruned at the end.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfBurgerError, Result};
use crate::io::{LoadedPdf, PdfReader};
use crate::merge::MergeObserver;
use crate::report::{Ledger, SkipReason, Stage};
use crate::utils::format_file_size;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs successfully merged.
    pub files_merged: usize,

    /// Number of PDFs skipped during the merge pass.
    pub files_skipped: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Total time taken for merge.
    pub merge_time: Duration,

    /// Total size of merged input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergedDocument {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Per-file outcomes of the merge pass.
    pub ledger: Ledger,
}

/// Page tree being assembled.
struct Accumulator {
    document: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl Accumulator {
    /// Adopt a document as the base of the output.
    fn from_base(mut document: Document) -> std::result::Result<Self, String> {
        let pages_id = pages_root(&document)?;

        // Drop page labels, outlines and the like that refer to the base alone.
        let catalog = document
            .catalog_mut()
            .map_err(|e| format!("failed to get catalog: {e}"))?;
        const BASE_ONLY: [&[u8]; 3] = [b"Outlines", b"PageLabels", b"StructTreeRoot"];
        for key in BASE_ONLY {
            catalog.remove(key);
        }

        let page_count = document.get_pages().len();
        inline_page_root(&mut document, pages_id, page_count)?;

        Ok(Self {
            document,
            pages_id,
            page_count,
        })
    }

    /// Append all pages of `source`, returning how many were added.
    fn append(&mut self, mut source: Document) -> std::result::Result<usize, String> {
        pages_root(&source)?;

        source.renumber_objects_with(self.document.max_id + 1);
        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
        if page_ids.is_empty() {
            return Err("PDF has no pages".to_string());
        }

        // Inheritable attributes live on intermediate page tree nodes; copy
        // them down before the leaves move to a new parent.
        for &page_id in &page_ids {
            inherit_page_attributes(&mut source, page_id);
        }

        self.document.max_id = self.document.max_id.max(source.max_id);
        self.document.objects.extend(source.objects);

        for &page_id in &page_ids {
            if let Ok(Object::Dictionary(page)) = self.document.get_object_mut(page_id) {
                page.set("Parent", Object::Reference(self.pages_id));
            }
        }

        let root = self
            .document
            .get_object_mut(self.pages_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| format!("failed to get pages object: {e}"))?;

        match root.get_mut(b"Kids") {
            Ok(Object::Array(kids)) => {
                kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));
            }
            _ => return Err("pages dictionary missing Kids array".to_string()),
        }

        self.page_count += page_ids.len();
        root.set("Count", Object::Integer(self.page_count as i64));

        Ok(page_ids.len())
    }

    fn finish(mut self) -> Document {
        self.document.prune_objects();
        self.document.renumber_objects();
        self.document
    }
}

/// Object id of the page tree root, checking that it is a dictionary.
fn pages_root(doc: &Document) -> std::result::Result<ObjectId, String> {
    let pages_id = doc
        .catalog()
        .and_then(|c| c.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| format!("failed to get pages reference: {e}"))?;

    doc.get_dictionary(pages_id)
        .map_err(|e| format!("failed to get pages object: {e}"))?;

    Ok(pages_id)
}

/// Store the root's `Kids` and `Count` as direct objects so later appends
/// can edit them in place. An indirect `Kids` array is copied; the original
/// object is pruned once nothing refers to it.
fn inline_page_root(
    doc: &mut Document,
    pages_id: ObjectId,
    page_count: usize,
) -> std::result::Result<(), String> {
    let root = doc
        .get_dictionary(pages_id)
        .map_err(|e| format!("failed to get pages object: {e}"))?;

    let kids = match root.get(b"Kids") {
        Ok(Object::Array(kids)) => kids.clone(),
        Ok(Object::Reference(kids_id)) => doc
            .get_object(*kids_id)
            .and_then(Object::as_array)
            .map_err(|e| format!("failed to resolve Kids array: {e}"))?
            .clone(),
        _ => return Err("pages dictionary missing Kids array".to_string()),
    };

    let root = doc
        .get_object_mut(pages_id)
        .and_then(Object::as_dict_mut)
        .map_err(|e| format!("failed to get pages object: {e}"))?;
    root.set("Kids", Object::Array(kids));
    root.set("Count", Object::Integer(page_count as i64));

    Ok(())
}

/// Copy `Resources`, `MediaBox`, `CropBox` and `Rotate` from ancestors onto
/// the page when the page does not set them itself.
fn inherit_page_attributes(doc: &mut Document, page_id: ObjectId) {
    const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

    let mut inherited = Vec::new();
    let Ok(page) = doc.get_dictionary(page_id) else {
        return;
    };
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut missing: Vec<&[u8]> = INHERITABLE
        .into_iter()
        .filter(|key| !page.has(key))
        .collect();

    // Bounded walk; malformed trees may contain cycles.
    let mut depth = 0;
    while let Some(node_id) = parent {
        if missing.is_empty() || depth > 64 {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                inherited.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    if let Ok(page) = doc.get_dictionary_mut(page_id) {
        for (key, value) in inherited {
            page.set(key, value);
        }
    }
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the files in order.
    ///
    /// A file that fails to load, or whose page tree cannot be spliced in, is
    /// recorded as skipped and the merge continues.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBurgerError::MergeProducedEmptyOutput`] when no file could
    /// be merged.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfburger::merge::{Merger, NoopObserver};
    /// # use std::path::PathBuf;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let files = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let merged = Merger::new().merge(&files, &mut NoopObserver)?;
    /// println!("{} pages", merged.statistics.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(
        &self,
        files: &[PathBuf],
        observer: &mut dyn MergeObserver,
    ) -> Result<MergedDocument> {
        let merge_start = Instant::now();
        let mut input_size = 0;
        let mut ledger = Ledger::new();
        let mut accumulator: Option<Accumulator> = None;

        observer.merge_started(files.len());

        for (index, path) in files.iter().enumerate() {
            let loaded = match self.reader.load(path) {
                Ok(loaded) => loaded,
                Err(err) => {
                    let reason = err.skip_reason().ok_or(err)?;
                    skip(&mut ledger, observer, index, path, reason);
                    continue;
                }
            };

            let LoadedPdf {
                document,
                file_size,
                ..
            } = loaded;

            let appended = match accumulator.as_mut() {
                Some(acc) => acc.append(document),
                None => Accumulator::from_base(document).map(|acc| {
                    let pages = acc.page_count;
                    accumulator = Some(acc);
                    pages
                }),
            };

            match appended {
                Ok(pages) => {
                    tracing::debug!(path = %path.display(), pages, "appended pages");
                    input_size += file_size;
                    ledger.merged(path.clone(), pages);
                    observer.file_merged(index, path, pages);
                }
                Err(details) => {
                    skip(
                        &mut ledger,
                        observer,
                        index,
                        path,
                        SkipReason::CorruptDocument { details },
                    );
                }
            }
        }

        let Some(accumulator) = accumulator else {
            observer.merge_finished();
            return Err(PdfBurgerError::MergeProducedEmptyOutput);
        };

        let total_pages = accumulator.page_count;
        let document = accumulator.finish();
        observer.merge_finished();

        let statistics = MergeStatistics {
            files_merged: ledger.merged_count(),
            files_skipped: ledger.skipped_count(),
            total_pages,
            merge_time: merge_start.elapsed(),
            input_size,
        };

        Ok(MergedDocument {
            document,
            statistics,
            ledger,
        })
    }
}

fn skip(
    ledger: &mut Ledger,
    observer: &mut dyn MergeObserver,
    index: usize,
    path: &Path,
    reason: SkipReason,
) {
    tracing::debug!(path = %path.display(), %reason, "skipping file during merge");
    observer.file_skipped(index, path, &reason);
    ledger.skip(path, Stage::Merge, reason);
}
