//! Utilities for path handling, glob expansion and size formatting.

use std::path::{Path, PathBuf};

use crate::sort::sort_paths_naturally;

/// Characters that make an input a glob pattern.
const GLOB_METACHARACTERS: [char; 3] = ['*', '?', '['];

/// Whether `raw` looks like a glob pattern.
pub fn is_glob_pattern(raw: &Path) -> bool {
    raw.to_string_lossy().contains(GLOB_METACHARACTERS)
}

/// Expand a single glob pattern into existing paths, in natural order.
///
/// Relative patterns are matched against `base`. Unreadable entries the
/// iterator runs into are dropped; they cannot be told apart from a
/// non-match at this level.
///
/// Errors:
/// - Propagates `glob` parse errors.
pub fn collect_paths_for_pattern(
    pattern: &Path,
    base: &Path,
) -> Result<Vec<PathBuf>, glob::PatternError> {
    let pattern = absolutize(pattern, base);
    let mut resolved_paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable glob match");
                None
            }
        })
        .collect();

    sort_paths_naturally(&mut resolved_paths);
    Ok(resolved_paths)
}

/// Join `path` onto `base` unless it is already absolute.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Whether a path carries the `.pdf` extension, ignoring case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
