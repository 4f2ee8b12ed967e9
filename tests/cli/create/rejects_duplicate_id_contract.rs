use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn create_rejects_id_already_in_storage() {
    let ctx = TestContext::new();
    let path = ctx.write_definition("components/banner.component.yml", "name: Original\ntype: ''\n");

    ctx.cli()
        .args(["create", "--name", "Banner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The machine-readable name 'banner' is already in use"));

    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("Original"), "existing definition must not be overwritten");
}

#[test]
fn create_rejects_id_defined_by_another_provider() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    ctx.cli()
        .args(["create", "--name", "Another slider", "--id", "slider"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in use"));

    assert!(!ctx.definition_path("slider").exists());
}

#[test]
fn create_rejects_malformed_machine_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["create", "--name", "Widget", "--id", "My-Widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "must contain only lowercase letters, numbers, and underscores",
        ));
}
