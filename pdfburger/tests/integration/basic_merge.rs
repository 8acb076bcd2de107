//! Integration tests for basic PDF merging operations.

use pdfburger::merge::NoopObserver;
use pdfburger::report::{MergeSummary, RunOutcome};
use pdfburger::{Config, run};

use crate::common::{Workspace, page_labels};

fn merge(config: &Config) -> MergeSummary {
    match run(config, &mut NoopObserver) {
        Ok(RunOutcome::Merged(summary)) => summary,
        other => panic!("expected a merge, got {other:?}"),
    }
}

#[test]
fn test_merge_files_in_given_order() {
    let ws = Workspace::new();
    ws.pdf("b.pdf", 1);
    ws.pdf("a.pdf", 2);

    let summary = merge(&ws.config(&["b.pdf", "a.pdf"]));

    assert_eq!(summary.files_merged, 2);
    assert_eq!(summary.total_pages, 3);
    assert_eq!(
        page_labels(&summary.output),
        vec!["b.pdf-1", "a.pdf-1", "a.pdf-2"]
    );
}

#[test]
fn test_merge_same_file_twice() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 2);

    let summary = merge(&ws.config(&["a.pdf", "a.pdf"]));

    assert_eq!(summary.total_pages, 4);
    assert_eq!(
        page_labels(&summary.output),
        vec!["a.pdf-1", "a.pdf-2", "a.pdf-1", "a.pdf-2"]
    );
}

#[test]
fn test_single_directory_output_name() {
    let ws = Workspace::new();
    ws.pdf("invoices/2.pdf", 1);
    ws.pdf("invoices/1.pdf", 1);

    let summary = merge(&ws.config(&["./invoices/"]));

    assert_eq!(summary.output, ws.join("invoices.pdf"));
    assert_eq!(
        page_labels(&summary.output),
        vec!["invoices/1.pdf-1", "invoices/2.pdf-1"]
    );
}

#[test]
fn test_explicit_output_in_new_directory() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);

    let config = ws.config(&["a.pdf"]).with_output("out/nested/book.pdf");
    let summary = merge(&config);

    assert_eq!(summary.output, ws.join("out/nested/book.pdf"));
    assert!(summary.output.exists());
}

#[test]
fn test_overwrite_replaces_explicit_output() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 3);
    ws.file("report.pdf", b"old contents");

    let mut config = ws.config(&["a.pdf"]).with_output("report.pdf");
    config.overwrite = true;
    let summary = merge(&config);

    assert_eq!(page_labels(&summary.output).len(), 3);
}

#[test]
fn test_repeated_runs_are_identical() {
    let ws = Workspace::new();
    ws.pdf("docs/1.pdf", 2);
    ws.pdf("docs/2.pdf", 1);

    let mut config = ws.config(&["docs"]).with_output("out.pdf");
    config.overwrite = true;

    let first = merge(&config);
    let first_labels = page_labels(&first.output);
    let second = merge(&config);

    assert_eq!(first.total_pages, second.total_pages);
    assert_eq!(first_labels, page_labels(&second.output));
}

#[test]
fn test_collision_numbering_across_runs() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.pdf("b.pdf", 1);
    let config = ws.config(&["a.pdf", "b.pdf"]);

    let outputs: Vec<_> = (0..3).map(|_| merge(&config).output).collect();

    assert_eq!(
        outputs,
        vec![
            ws.join("merged.pdf"),
            ws.join("merged_001.pdf"),
            ws.join("merged_002.pdf"),
        ]
    );
}

#[test]
fn test_no_temporary_files_left_behind() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);

    merge(&ws.config(&["a.pdf"]));

    assert_eq!(ws.entries(), vec!["a.pdf", "merged.pdf"]);
}
