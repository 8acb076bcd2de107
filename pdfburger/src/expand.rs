//! Input expansion.
//!
//! Turns the user's ordered input paths into an ordered list of readable
//! PDF files. Top-level order is kept as given; only the files a directory
//! or pattern expands to are natural-sorted, and they stay a contiguous
//! block at that input's position.
//!
//! Per-path problems never abort expansion. They are recorded in the
//! returned [`Ledger`] with [`Stage::Discovery`].

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{PdfBurgerError, Result};
use crate::io::PdfReader;
use crate::report::{Ledger, SkipReason, Stage};
use crate::sort::natural_cmp_os;
use crate::utils::{absolutize, collect_paths_for_pattern, has_pdf_extension, is_glob_pattern};

/// How an input path was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// An existing regular file (symlinks resolved).
    File,
    /// An existing directory.
    Directory,
    /// No such path, but it contains glob metacharacters.
    Pattern,
    /// Anything else: missing, unreadable, or a special file.
    Missing,
}

/// One user-provided input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    /// The path as given.
    pub raw: PathBuf,
    /// `raw` resolved against the working directory.
    pub path: PathBuf,
    /// Classification at inspection time.
    pub kind: InputKind,
}

impl InputSpec {
    /// Classify `raw`, resolving it against `base` when relative.
    pub fn inspect(raw: &Path, base: &Path) -> Self {
        let path = absolutize(raw, base);
        let kind = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => InputKind::File,
            Ok(meta) if meta.is_dir() => InputKind::Directory,
            Ok(_) => InputKind::Missing,
            Err(_) if is_glob_pattern(raw) => InputKind::Pattern,
            Err(_) => InputKind::Missing,
        };

        Self {
            raw: raw.to_path_buf(),
            path,
            kind,
        }
    }

    /// Whether this input is a single directory.
    pub fn is_directory(&self) -> bool {
        self.kind == InputKind::Directory
    }
}

/// Result of expanding the inputs.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Inputs in the order given.
    pub inputs: Vec<InputSpec>,
    /// Readable PDF files in merge order.
    pub files: Vec<PathBuf>,
    /// Accepted and skipped paths, in discovery order.
    pub ledger: Ledger,
}

impl Expansion {
    /// Fail with [`PdfBurgerError::NoInputFiles`] if nothing is left to merge.
    pub fn require_files(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(PdfBurgerError::NoInputFiles);
        }
        Ok(())
    }
}

/// Expands input paths into PDF files.
#[derive(Debug, Clone, Default)]
pub struct InputExpander {
    recursive: bool,
    reader: PdfReader,
}

impl InputExpander {
    /// Create an expander. With `recursive`, directories are descended into.
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            reader: PdfReader::new(),
        }
    }

    /// Expand `raw_inputs`, resolving relative paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBurgerError::NoInputFiles`] if no readable PDF remains.
    pub fn expand(&self, raw_inputs: &[PathBuf], base: &Path) -> Result<Expansion> {
        let expansion = self.collect(raw_inputs, base)?;
        expansion.require_files()?;
        Ok(expansion)
    }

    /// Like [`expand`](Self::expand), but an empty result is not an error.
    pub fn collect(&self, raw_inputs: &[PathBuf], base: &Path) -> Result<Expansion> {
        let mut files = Vec::new();
        let mut ledger = Ledger::new();

        let inputs: Vec<InputSpec> = raw_inputs
            .iter()
            .map(|raw| InputSpec::inspect(raw, base))
            .collect();

        for input in &inputs {
            tracing::debug!(input = %input.raw.display(), kind = ?input.kind, "expanding input");
            match input.kind {
                InputKind::File => self.admit(&input.path, &mut files, &mut ledger)?,
                InputKind::Directory => {
                    self.expand_directory(&input.path, &mut files, &mut ledger)?
                }
                InputKind::Pattern => self.expand_pattern(input, base, &mut files, &mut ledger)?,
                InputKind::Missing => {
                    ledger.skip(&input.path, Stage::Discovery, SkipReason::NotFound)
                }
            }
        }

        tracing::debug!(
            files = files.len(),
            skipped = ledger.skipped_count(),
            "expansion finished"
        );

        Ok(Expansion {
            inputs,
            files,
            ledger,
        })
    }

    /// Validate one file and queue it, or record why not.
    fn admit(&self, path: &Path, files: &mut Vec<PathBuf>, ledger: &mut Ledger) -> Result<()> {
        match self.reader.probe(path) {
            Ok(pages) => {
                tracing::trace!(path = %path.display(), pages, "accepted");
                files.push(path.to_path_buf());
                ledger.accept(path);
                Ok(())
            }
            Err(err) => {
                let reason = err.skip_reason().ok_or(err)?;
                tracing::debug!(path = %path.display(), %reason, "skipping file");
                ledger.skip(path, Stage::Discovery, reason);
                Ok(())
            }
        }
    }

    fn expand_directory(
        &self,
        dir: &Path,
        files: &mut Vec<PathBuf>,
        ledger: &mut Ledger,
    ) -> Result<()> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by(files_then_directories);

        let mut candidates = 0;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(dir).to_path_buf();
                    tracing::debug!(path = %path.display(), error = %err, "walk error");
                    ledger.skip(path, Stage::Discovery, SkipReason::NotFound);
                    continue;
                }
            };

            if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
                candidates += 1;
                self.admit(entry.path(), files, ledger)?;
            }
        }

        if candidates == 0 {
            tracing::debug!(dir = %dir.display(), "no PDFs in directory");
            ledger.skip(dir, Stage::Discovery, SkipReason::EmptyDirectory);
        }

        Ok(())
    }

    fn expand_pattern(
        &self,
        input: &InputSpec,
        base: &Path,
        files: &mut Vec<PathBuf>,
        ledger: &mut Ledger,
    ) -> Result<()> {
        let matches = match collect_paths_for_pattern(&input.raw, base) {
            Ok(matches) => matches,
            Err(err) => {
                tracing::debug!(pattern = %input.raw.display(), error = %err, "invalid pattern");
                ledger.skip(&input.path, Stage::Discovery, SkipReason::NotFound);
                return Ok(());
            }
        };

        if matches.is_empty() {
            ledger.skip(&input.path, Stage::Discovery, SkipReason::NotFound);
            return Ok(());
        }

        for path in matches {
            match InputSpec::inspect(&path, base).kind {
                InputKind::File => self.admit(&path, files, ledger)?,
                InputKind::Directory => self.expand_directory(&path, files, ledger)?,
                InputKind::Pattern | InputKind::Missing => {
                    ledger.skip(&path, Stage::Discovery, SkipReason::NotFound)
                }
            }
        }

        Ok(())
    }
}

/// Sibling order: files before directories, then natural order by name.
fn files_then_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| natural_cmp_os(a.file_name(), b.file_name()))
}
