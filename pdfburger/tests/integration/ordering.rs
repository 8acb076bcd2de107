//! Integration tests for input ordering.

use pdfburger::expand::InputExpander;
use pdfburger::merge::NoopObserver;
use pdfburger::report::RunOutcome;
use pdfburger::run;
use std::path::PathBuf;

use crate::common::{Workspace, page_labels, relative};

fn expand(ws: &Workspace, inputs: &[&str], recursive: bool) -> Vec<String> {
    let inputs: Vec<PathBuf> = inputs.iter().map(PathBuf::from).collect();
    let expansion = InputExpander::new(recursive)
        .expand(&inputs, ws.path())
        .unwrap();
    relative(&expansion.files, ws.path())
}

#[test]
fn test_directory_contents_are_natural_sorted() {
    let ws = Workspace::new();
    for name in ["10.pdf", "2.pdf", "1.pdf", "Chapter 3.pdf", "chapter 20.pdf"] {
        ws.pdf(&format!("docs/{name}"), 1);
    }

    assert_eq!(
        expand(&ws, &["docs"], false),
        vec![
            "docs/1.pdf",
            "docs/2.pdf",
            "docs/10.pdf",
            "docs/Chapter 3.pdf",
            "docs/chapter 20.pdf",
        ]
    );
}

#[test]
fn test_directory_block_keeps_its_position() {
    let ws = Workspace::new();
    ws.pdf("cover.pdf", 1);
    ws.pdf("chapters/2.pdf", 1);
    ws.pdf("chapters/1.pdf", 1);
    ws.pdf("appendix.pdf", 1);

    let config = ws.config(&["cover.pdf", "chapters/", "appendix.pdf"]);
    let Ok(RunOutcome::Merged(summary)) = run(&config, &mut NoopObserver) else {
        panic!("expected a merge");
    };

    assert_eq!(
        page_labels(&summary.output),
        vec![
            "cover.pdf-1",
            "chapters/1.pdf-1",
            "chapters/2.pdf-1",
            "appendix.pdf-1",
        ]
    );
}

#[test]
fn test_recursive_descent_is_depth_first() {
    let ws = Workspace::new();
    ws.pdf("scans/b.pdf", 1);
    ws.pdf("scans/a.pdf", 1);
    ws.pdf("scans/2019/12.pdf", 1);
    ws.pdf("scans/2019/3.pdf", 1);
    ws.pdf("scans/2020/1.pdf", 1);

    assert_eq!(
        expand(&ws, &["scans"], false),
        vec!["scans/a.pdf", "scans/b.pdf"]
    );
    assert_eq!(
        expand(&ws, &["scans"], true),
        vec![
            "scans/a.pdf",
            "scans/b.pdf",
            "scans/2019/3.pdf",
            "scans/2019/12.pdf",
            "scans/2020/1.pdf",
        ]
    );
}

#[test]
fn test_glob_pattern_expands_in_place() {
    let ws = Workspace::new();
    ws.pdf("intro.pdf", 1);
    ws.pdf("part10.pdf", 1);
    ws.pdf("part9.pdf", 1);
    ws.pdf("outro.pdf", 1);

    assert_eq!(
        expand(&ws, &["intro.pdf", "part*.pdf", "outro.pdf"], false),
        vec!["intro.pdf", "part9.pdf", "part10.pdf", "outro.pdf"]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_followed() {
    let ws = Workspace::new();
    ws.pdf("real/x.pdf", 1);
    ws.pdf("docs/a.pdf", 1);
    std::os::unix::fs::symlink(ws.join("real"), ws.join("docs/linked")).unwrap();

    assert_eq!(
        expand(&ws, &["docs"], true),
        vec!["docs/a.pdf", "docs/linked/x.pdf"]
    );
}
