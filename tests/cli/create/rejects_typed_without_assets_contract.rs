use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn typed_submission_without_assets_reports_both_sides() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--name", "Lonely", "--type", "block"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing css library."))
        .stderr(predicate::str::contains("Missing js library."));

    assert!(!ctx.definition_path("lonely").exists());
}

#[test]
fn unknown_type_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--name", "Odd", "--type", "theme", "--js", "https://x.test/a.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The submitted value in the Type element is not allowed."));
}
