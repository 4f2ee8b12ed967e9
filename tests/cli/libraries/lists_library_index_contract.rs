use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn libraries_lists_both_asset_kinds() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    ctx.cli()
        .arg("libraries")
        .assert()
        .success()
        .stdout(predicate::str::contains("JS libraries:\n  slider - Slider"))
        .stdout(predicate::str::contains("CSS libraries:\n  fonts - Fonts"))
        .stdout(predicate::str::contains("hero").not());
}

#[test]
fn libraries_filters_by_kind() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    ctx.cli()
        .args(["libraries", "--kind", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fonts - Fonts"))
        .stdout(predicate::str::contains("JS libraries:").not());
}

#[test]
fn libraries_rejects_unknown_kind() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["libraries", "--kind", "svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid asset kind 'svg'"));
}

#[test]
fn libraries_reports_empty_index() {
    let ctx = TestContext::new();

    ctx.cli().arg("libraries").assert().success().stdout(predicate::str::contains("No libraries found."));
}
