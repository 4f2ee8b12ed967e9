use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn machine_name_collapses_disallowed_characters() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["machine-name", "Hero  Banner (v2)"])
        .assert()
        .success()
        .stdout(predicate::eq("hero_banner_v2_\n"));
}

#[test]
fn machine_name_truncates_long_labels() {
    let ctx = TestContext::new();
    let label = "a".repeat(80);

    ctx.cli()
        .args(["machine-name", &label])
        .assert()
        .success()
        .stdout(format!("{}\n", "a".repeat(64)));
}
