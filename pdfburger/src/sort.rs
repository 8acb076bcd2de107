//! Natural ordering for file names.
//!
//! Digit runs compare by numeric value, so `2.pdf` sorts before `10.pdf`.
//!
//! ```
//! use pdfburger::sort::natural_cmp;
//! use std::cmp::Ordering;
//!
//! assert_eq!(natural_cmp("2.pdf", "10.pdf"), Ordering::Less);
//! assert_eq!(natural_cmp("Chapter 3", "chapter 12"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Number(&'a str),
    Text(&'a str),
}

/// Splits a name into alternating digit and non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != numeric)
            .map_or(self.rest.len(), |(i, _)| i);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if numeric {
            Run::Number(run)
        } else {
            Run::Text(run)
        })
    }
}

fn runs(s: &str) -> Runs<'_> {
    Runs { rest: s }
}

/// Compare two digit strings by value without parsing them.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn cmp_run(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Number(x), Run::Number(y)) => cmp_numeric(x, y),
        (Run::Text(x), Run::Text(y)) => cmp_text(x, y),
        (Run::Number(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Number(_)) => Ordering::Greater,
    }
}

/// Compare two names in natural order.
///
/// Numeric runs compare by value, text runs case-insensitively, and a name
/// that runs out of runs first sorts first. Names that are still equal (for
/// example `01` and `1`) fall back to plain string order, which makes this a
/// total order usable with stable sorts.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_run(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// [`natural_cmp`] for OS strings; non-UTF-8 bytes are replaced lossily.
pub fn natural_cmp_os(a: &OsStr, b: &OsStr) -> Ordering {
    natural_cmp(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Compare two paths by their final component.
pub fn natural_cmp_file_name(a: &Path, b: &Path) -> Ordering {
    let name = |p: &Path| p.file_name().unwrap_or(p.as_os_str()).to_owned();
    natural_cmp_os(&name(a), &name(b)).then_with(|| a.cmp(b))
}

/// Sort paths in place by file name, in natural order.
pub fn sort_paths_naturally(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_cmp_file_name(a, b));
}
