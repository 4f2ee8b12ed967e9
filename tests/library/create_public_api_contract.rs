use assert_fs::prelude::*;
use componentry::{FormState, FormValues, SubmitOutcome, create_at, libraries_at, list_at};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn public_api_create_then_list_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let values = FormValues {
        name: "Card".to_string(),
        component_type: "plugin".to_string(),
        assets_css: "https://cdn.test/card.css\n\n  https://cdn.test/card-dark.css  ".to_string(),
        ..Default::default()
    };
    let outcome = create_at(&values, None, root).expect("create failed");
    assert_eq!(outcome.state(), FormState::Complete);
    let SubmitOutcome::Complete(created) = outcome else {
        panic!("expected completion");
    };
    assert_eq!(created.id, "card");
    assert_eq!(created.path, root.join("components/card/card.component.yml"));
    assert!(created.path.exists());

    let components = list_at(None, root).expect("list failed");
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].provider, "custom");
    assert_eq!(components[0].component_type, "plugin");

    // Only library components are offered as existing dependencies.
    assert!(libraries_at(None, None, root).unwrap().is_empty());

    let again = create_at(&values, None, root).expect("second create failed");
    let SubmitOutcome::Rejected(errors) = again else {
        panic!("duplicate id should be rejected");
    };
    assert!(errors.to_string().contains("already in use"));
}

#[test]
fn public_api_honours_configured_storage() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.path();
    temp.child("componentry.toml")
        .write_str("[storage]\nroot = \"modules/custom/components\"\nprovider = \"site\"\n")
        .unwrap();

    let values = FormValues {
        name: "Lib".to_string(),
        component_type: "library".to_string(),
        assets_js: "https://cdn.test/lib.js".to_string(),
        ..Default::default()
    };
    let outcome = create_at(&values, None, root).expect("create failed");
    assert!(matches!(outcome, SubmitOutcome::Complete(_)));
    temp.child("modules/custom/components/lib/lib.component.yml")
        .assert(predicate::path::is_file())
        .assert(predicate::str::contains("crossorigin: anonymous"));

    let libraries = libraries_at(None, None, root).unwrap();
    assert_eq!(libraries.len(), 1);
    assert_eq!(libraries[0].kind, "js");
    assert_eq!(libraries[0].id, "lib");
    assert_eq!(list_at(None, root).unwrap()[0].provider, "site");
}
