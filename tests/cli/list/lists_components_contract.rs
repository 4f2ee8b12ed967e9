use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_reports_empty_catalog() {
    let ctx = TestContext::new();

    ctx.cli().arg("list").assert().success().stdout(predicate::str::contains("No components found."));
}

#[test]
fn list_groups_components_by_provider() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();
    ctx.write_definition("components/banner.component.yml", "name: Banner\ntype: block\n");

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  custom:\n    banner - Banner [block]"))
        .stdout(predicate::str::contains("  site_studio:"))
        .stdout(predicate::str::contains("    slider - Slider [library]"));
}

#[test]
fn list_json_includes_every_component() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    let output = ctx.cli().args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().expect("json output should be an array");
    let ids: Vec<&str> = entries.iter().filter_map(|e| e["id"].as_str()).collect();
    assert_eq!(ids, ["fonts", "hero", "slider"]);
    assert!(entries.iter().all(|e| e["provider"] == "site_studio"));
    assert_eq!(entries[1]["type"], "block");
}

#[test]
fn list_skips_malformed_definitions() {
    let ctx = TestContext::new();
    ctx.write_definition("components/good.component.yml", "name: Good\n");
    ctx.write_definition("components/bad.component.yml", "name: [unterminated\n");

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("good - Good"))
        .stdout(predicate::str::contains("bad").not());
}
