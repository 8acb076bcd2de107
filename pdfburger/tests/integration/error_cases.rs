//! Integration tests for skip handling and fatal errors.

use pdfburger::merge::{MergeObserver, NoopObserver};
use pdfburger::report::{FileOutcome, FileRecord, RunOutcome, SkipReason, Stage};
use pdfburger::{PdfBurgerError, run};
use std::path::{Path, PathBuf};

use crate::common::{Workspace, page_labels};

#[derive(Default)]
struct Recorder {
    discovery: Vec<PathBuf>,
    merged: Vec<PathBuf>,
}

impl MergeObserver for Recorder {
    fn input_skipped(&mut self, record: &FileRecord) {
        self.discovery.push(record.path.clone());
    }

    fn file_merged(&mut self, _index: usize, path: &Path, _pages: usize) {
        self.merged.push(path.to_path_buf());
    }
}

#[test]
fn test_corrupt_file_in_directory_is_skipped() {
    let ws = Workspace::new();
    ws.pdf("docs/a.pdf", 1);
    ws.corrupt("docs/b.pdf");

    let mut recorder = Recorder::default();
    let outcome = run(&ws.config(&["docs"]), &mut recorder).unwrap();
    let RunOutcome::Merged(summary) = outcome else {
        panic!("expected a merge");
    };

    assert_eq!(summary.files_merged, 1);
    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.skipped[0].path, ws.join("docs/b.pdf"));
    assert!(matches!(
        summary.skipped[0].outcome,
        FileOutcome::Skipped {
            stage: Stage::Discovery,
            reason: SkipReason::CorruptDocument { .. }
        }
    ));
    assert_eq!(recorder.discovery, vec![ws.join("docs/b.pdf")]);
    assert_eq!(recorder.merged, vec![ws.join("docs/a.pdf")]);
    assert_eq!(page_labels(&summary.output), vec!["docs/a.pdf-1"]);
}

#[test]
fn test_missing_input_is_skipped() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);

    let outcome = run(&ws.config(&["missing.pdf", "a.pdf"]), &mut NoopObserver).unwrap();

    let RunOutcome::Merged(summary) = outcome else {
        panic!("expected a merge");
    };
    assert_eq!(summary.skipped[0].skip_reason(), Some(&SkipReason::NotFound));
}

#[test]
fn test_directory_without_pdfs_is_no_input_files() {
    let ws = Workspace::new();
    ws.file("docs/readme.txt", b"hello");

    let mut recorder = Recorder::default();
    let err = run(&ws.config(&["docs"]), &mut recorder).unwrap_err();

    assert!(matches!(err, PdfBurgerError::NoInputFiles));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(recorder.discovery, vec![ws.join("docs")]);
    assert_eq!(ws.entries(), vec!["docs"]);
}

#[test]
fn test_all_corrupt_is_no_input_files() {
    let ws = Workspace::new();
    ws.corrupt("docs/a.pdf");
    ws.corrupt("docs/b.pdf");

    let err = run(&ws.config(&["docs"]), &mut NoopObserver).unwrap_err();

    assert!(matches!(err, PdfBurgerError::NoInputFiles));
    assert_eq!(ws.entries(), vec!["docs"]);
}

#[test]
fn test_existing_explicit_output_is_fatal() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.file("report.pdf", b"keep");

    let err = run(
        &ws.config(&["a.pdf"]).with_output("report.pdf"),
        &mut NoopObserver,
    )
    .unwrap_err();

    assert!(matches!(err, PdfBurgerError::OutputExists { .. }));
    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("--overwrite"));
    assert_eq!(std::fs::read(ws.join("report.pdf")).unwrap(), b"keep");
}

#[test]
fn test_explicit_output_directory_is_invalid() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.dir("out");

    let mut config = ws.config(&["a.pdf"]).with_output("out");
    config.overwrite = true;
    let err = run(&config, &mut NoopObserver).unwrap_err();

    assert!(matches!(err, PdfBurgerError::InvalidConfig { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_directory_leaves_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    let locked = ws.dir("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions.
    if std::fs::write(locked.join("probe"), b"").is_ok() {
        return;
    }

    let config = ws.config(&["a.pdf"]).with_output("locked/out.pdf");
    let err = run(&config, &mut NoopObserver).unwrap_err();

    assert_eq!(err.exit_code(), 5);
    assert_eq!(std::fs::read_dir(&locked).unwrap().count(), 0);

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
}
