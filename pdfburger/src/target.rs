//! Output path resolution.
//!
//! An explicit output path is used as given and never replaced without
//! `overwrite`. A computed default (`{dir}.pdf` for a single directory input,
//! `merged.pdf` otherwise) lives in the working directory and is numbered
//! (`merged_001.pdf`, `merged_002.pdf`, ...) until it does not collide.

use std::path::{Path, PathBuf};

use crate::error::{PdfBurgerError, Result};
use crate::expand::InputSpec;
use crate::utils::absolutize;

/// Default output name when no better one is available.
pub const DEFAULT_OUTPUT_NAME: &str = "merged.pdf";

/// Where the merged document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Absolute output path.
    pub path: PathBuf,
    /// Whether an existing file at `path` may be replaced.
    pub overwrite: bool,
    /// Whether the path came from the user rather than the default rules.
    pub explicit: bool,
}

/// Resolves the output target for a run.
#[derive(Debug, Clone)]
pub struct OutputResolver {
    base: PathBuf,
    overwrite: bool,
    dry_run: bool,
}

impl OutputResolver {
    /// Create a resolver placing outputs relative to `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            overwrite: false,
            dry_run: false,
        }
    }

    /// Allow replacing an existing explicit output.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Skip the existence check for explicit outputs.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolve the output path.
    ///
    /// # Errors
    ///
    /// - [`PdfBurgerError::OutputExists`] if `explicit` exists and neither
    ///   overwrite nor dry-run is set
    /// - [`PdfBurgerError::InvalidConfig`] if `explicit` is a directory
    pub fn resolve(&self, explicit: Option<&Path>, inputs: &[InputSpec]) -> Result<OutputTarget> {
        if let Some(explicit) = explicit {
            let path = absolutize(explicit, &self.base);

            if path.is_dir() {
                return Err(PdfBurgerError::invalid_config(format!(
                    "output path is a directory: {}",
                    path.display()
                )));
            }
            if is_occupied(&path) && !self.overwrite && !self.dry_run {
                return Err(PdfBurgerError::output_exists(path));
            }

            return Ok(OutputTarget {
                path,
                overwrite: self.overwrite,
                explicit: true,
            });
        }

        let candidate = self.base.join(default_name(inputs));
        let path = next_free_path(&candidate);
        tracing::debug!(output = %path.display(), "computed default output");

        Ok(OutputTarget {
            path,
            overwrite: self.overwrite,
            explicit: false,
        })
    }
}

/// Default file name for the given inputs.
///
/// A single directory input names the output after the directory as typed,
/// so a symlinked directory keeps the link's name and `.` becomes the
/// current directory's name. Only paths ending in `..` are canonicalized.
pub fn default_name(inputs: &[InputSpec]) -> String {
    match inputs {
        [only] if only.is_directory() => directory_name(&only.path)
            .map(|name| format!("{name}.pdf"))
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string()),
        _ => DEFAULT_OUTPUT_NAME.to_string(),
    }
}

fn directory_name(path: &Path) -> Option<String> {
    let name = match path.file_name() {
        Some(name) => name.to_os_string(),
        None => std::fs::canonicalize(path).ok()?.file_name()?.to_os_string(),
    };
    Some(name.to_string_lossy().into_owned())
}

/// First of `candidate`, `{stem}_001{ext}`, `{stem}_002{ext}`, ... that is
/// not taken. The counter widens past 999.
pub fn next_free_path(candidate: &Path) -> PathBuf {
    if !is_occupied(candidate) {
        return candidate.to_path_buf();
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = candidate
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u64 = 1;
    loop {
        let path = candidate.with_file_name(format!("{stem}_{counter:03}{ext}"));
        if !is_occupied(&path) {
            return path;
        }
        counter += 1;
    }
}

/// Whether anything, including a dangling symlink, sits at `path`.
fn is_occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
