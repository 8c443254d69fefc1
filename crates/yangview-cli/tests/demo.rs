//! Full-pipeline test over the demo fixtures in `demos/`.

use std::fs;
use std::path::Path;

use serde_json::json;
use yangview_annotate::annotate_document;
use yangview_schema::{Module, ModuleRegistry};

#[test]
fn test_demo_fixtures_round_trip() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let yin = fs::read_to_string(root.join("demos/users.yin")).unwrap();
    let data: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("demos/data.json")).unwrap()).unwrap();

    let mut registry = ModuleRegistry::new();
    let document = yangview_yin::parse(&yin).unwrap();
    registry.register(Module::from_document(document).unwrap());
    registry.materialize().unwrap();

    let annotated = annotate_document(&data, &registry);

    // The data comes through unchanged.
    assert_eq!(annotated.to_data(), data);

    // Documentation declared inside the grouping reaches the list entries.
    let view = annotated.to_view_json();
    assert_eq!(
        view["users:users"]["value"]["user"]["value"][0]["value"]["name"]["doc"],
        json!("Login name.")
    );
    // The list itself is documented once, its elements are not.
    assert_eq!(
        view["users:users"]["value"]["user"]["doc"],
        json!("One user entry.")
    );
    assert_eq!(
        view["users:users"]["value"]["user"]["value"][0]["doc"],
        serde_json::Value::Null
    );
}
