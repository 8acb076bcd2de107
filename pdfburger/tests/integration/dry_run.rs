//! Integration tests for dry-run mode.

use pdfburger::merge::NoopObserver;
use pdfburger::report::{DryRunPlan, RunOutcome, SkipReason};
use pdfburger::{Config, PdfBurgerError, run};

use crate::common::{Workspace, relative};

fn plan(mut config: Config) -> DryRunPlan {
    config.dry_run = true;
    match run(&config, &mut NoopObserver) {
        Ok(RunOutcome::DryRun(plan)) => plan,
        other => panic!("expected a dry run, got {other:?}"),
    }
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.pdf("b.pdf", 1);

    let plan = plan(ws.config(&["a.pdf", "b.pdf"]));

    assert_eq!(relative(&plan.files, ws.path()), vec!["a.pdf", "b.pdf"]);
    assert_eq!(plan.output, ws.join("merged.pdf"));
    assert_eq!(ws.entries(), vec!["a.pdf", "b.pdf"]);
}

#[test]
fn test_dry_run_shows_numbered_default() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.file("merged.pdf", b"taken");

    let plan = plan(ws.config(&["a.pdf"]));

    assert_eq!(plan.output, ws.join("merged_001.pdf"));
}

#[test]
fn test_dry_run_ignores_existing_explicit_output() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", 1);
    ws.file("report.pdf", b"taken");

    let plan = plan(ws.config(&["a.pdf"]).with_output("report.pdf"));

    assert_eq!(plan.output, ws.join("report.pdf"));
    assert_eq!(std::fs::read(ws.join("report.pdf")).unwrap(), b"taken");
}

#[test]
fn test_dry_run_lists_discovery_skips() {
    let ws = Workspace::new();
    ws.pdf("docs/good.pdf", 1);
    ws.corrupt("docs/bad.pdf");

    let plan = plan(ws.config(&["docs", "gone.pdf"]));

    assert_eq!(relative(&plan.files, ws.path()), vec!["docs/good.pdf"]);
    let reasons: Vec<_> = plan.skipped.iter().filter_map(|r| r.skip_reason()).collect();
    assert!(matches!(reasons[0], SkipReason::CorruptDocument { .. }));
    assert_eq!(reasons[1], &SkipReason::NotFound);
}

#[test]
fn test_dry_run_still_fails_without_inputs() {
    let ws = Workspace::new();
    ws.dir("empty");

    let mut config = ws.config(&["empty"]);
    config.dry_run = true;

    assert!(matches!(
        run(&config, &mut NoopObserver),
        Err(PdfBurgerError::NoInputFiles)
    ));
}
