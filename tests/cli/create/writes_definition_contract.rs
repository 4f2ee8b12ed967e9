use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_writes_library_definition_with_external_assets() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "create",
            "--name",
            "My Widget",
            "--type",
            "library",
            "--js",
            "https://cdn.example.com/a.js",
            "--js",
            "https://cdn.example.com/b.js",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component [My Widget] created"))
        .stdout(predicate::str::contains("my_widget - My Widget [library]"));

    let doc = ctx.read_definition("my_widget");
    assert_eq!(doc["name"].as_str(), Some("My Widget"));
    assert_eq!(doc["description"].as_str(), Some(""));
    assert_eq!(doc["type"].as_str(), Some("library"));

    let js = doc["js"].as_mapping().expect("js should be a mapping");
    let urls: Vec<&str> = js.keys().filter_map(|k| k.as_str()).collect();
    assert_eq!(urls, ["https://cdn.example.com/a.js", "https://cdn.example.com/b.js"]);
    let attrs = &doc["js"]["https://cdn.example.com/a.js"];
    assert_eq!(attrs["type"].as_str(), Some("external"));
    assert_eq!(attrs["minified"].as_bool(), Some(true));
    assert_eq!(attrs["crossorigin"].as_str(), Some("anonymous"));

    assert!(doc.get("css").is_none(), "css should be omitted");
    assert!(doc.get("dependencies").is_none(), "dependencies should be omitted");
}

#[test]
fn create_without_type_omits_asset_keys() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "create",
            "--name",
            "Plain",
            "--id",
            "plain",
            "--description",
            "No assets",
            "--js",
            "https://cdn.example.com/ignored.js",
        ])
        .assert()
        .success();

    let doc = ctx.read_definition("plain");
    assert_eq!(doc["description"].as_str(), Some("No assets"));
    assert_eq!(doc["type"].as_str(), Some(""));
    assert!(doc.get("js").is_none());
    assert!(doc.get("css").is_none());
    assert!(doc.get("dependencies").is_none());
}

#[test]
fn create_records_existing_libraries_as_dependencies() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    ctx.cli()
        .args([
            "create",
            "--name",
            "Gallery",
            "--type",
            "block",
            "--existing-js",
            "slider",
            "--existing-css",
            "fonts",
        ])
        .assert()
        .success();

    let doc = ctx.read_definition("gallery");
    let deps: Vec<&str> = doc["dependencies"]
        .as_sequence()
        .expect("dependencies should be a list")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(deps, ["fonts", "slider"]);
    assert!(doc.get("js").is_none());
}

#[test]
fn create_rejects_unknown_existing_library() {
    let ctx = TestContext::new();
    ctx.with_vendor_libraries();

    ctx.cli()
        .args(["create", "--name", "Gallery", "--type", "block", "--existing-js", "hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'hero' is not an available js library."));

    assert!(!ctx.definition_path("gallery").exists());
}

#[test]
fn create_fails_when_discovery_root_is_missing() {
    let ctx = TestContext::new();
    ctx.write_config("[discovery]\npaths = [\"missing\"]\n");

    ctx.cli()
        .args(["create", "--name", "Orphan", "--type", "block", "--js", "https://x.test/a.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Component discovery unavailable"));

    assert!(!ctx.definition_path("orphan").exists());
}

#[test]
fn create_with_repeated_url_stays_listable() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "create",
            "--name",
            "Repeat",
            "--type",
            "library",
            "--js",
            "https://cdn.example.com/a.js",
            "--js",
            "https://cdn.example.com/a.js",
        ])
        .assert()
        .success();

    let doc = ctx.read_definition("repeat");
    assert_eq!(doc["js"].as_mapping().map(|js| js.len()), Some(1));

    ctx.cli()
        .arg("libraries")
        .assert()
        .success()
        .stdout(predicate::str::contains("repeat - Repeat"));
}
