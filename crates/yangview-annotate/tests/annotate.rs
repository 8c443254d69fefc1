//! End-to-end annotation tests over inline YIN modules and JSON documents.

use serde_json::json;
use yangview_annotate::{AnnotatedValue, annotate_document};
use yangview_schema::{Module, ModuleRegistry};

fn registry_of(documents: &[&str]) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    for doc in documents {
        let parsed = yangview_yin::parse(doc).unwrap();
        registry.register(Module::from_document(parsed).unwrap());
    }
    registry.materialize().unwrap();
    registry
}

/// A qualified top-level key switches to the named module's tree, and the
/// presentation export carries the matching documentation.
#[test]
fn test_qualified_container_annotation() {
    let registry = registry_of(&[r#"
        <module name="m1">
          <prefix value="m1"/>
          <container name="c">
            <leaf name="x">
              <description><text>Station name.</text></description>
            </leaf>
          </container>
        </module>"#]);

    let data = json!({ "m1:c": { "x": "hello" } });
    let annotated = annotate_document(&data, &registry);

    assert_eq!(
        annotated.to_view_json(),
        json!({
            "m1:c": {
                "value": {
                    "x": { "value": "hello", "doc": "Station name." }
                }
            }
        })
    );
}

/// Every element of a list is annotated against the same schema context;
/// documentation sits on the list node, not on each element.
#[test]
fn test_list_elements_share_schema_context() {
    let registry = registry_of(&[r#"
        <module name="m1">
          <prefix value="m1"/>
          <list name="users">
            <description><text>All users.</text></description>
            <leaf name="x">
              <description><text>User id.</text></description>
            </leaf>
          </list>
        </module>"#]);

    let data = json!({ "m1:users": [ { "x": "a" }, { "x": "b" } ] });
    let annotated = annotate_document(&data, &registry);

    let AnnotatedValue::Object(top) = &annotated.value else {
        panic!("expected object");
    };
    let list = &top["m1:users"];
    assert_eq!(list.doc.as_deref(), Some("All users."));

    let AnnotatedValue::List(items) = &list.value else {
        panic!("expected list");
    };
    assert_eq!(items.len(), 2);
    for item in items {
        assert!(item.doc.is_none());
        let AnnotatedValue::Object(entry) = &item.value else {
            panic!("expected object element");
        };
        assert_eq!(entry["x"].doc.as_deref(), Some("User id."));
    }
}

/// Stripping the annotations reproduces the input document exactly,
/// schema or no schema.
#[test]
fn test_shape_preservation() {
    let registry = registry_of(&[r#"
        <module name="m1">
          <prefix value="m1"/>
          <container name="c"><leaf name="x"/></container>
        </module>"#]);

    let data = json!({
        "m1:c": { "x": "known" },
        "unknown:thing": { "deep": [1, 2, { "n": null }] },
        "loose": [true, false],
        "scalar": 42.5
    });

    let annotated = annotate_document(&data, &registry);
    assert_eq!(annotated.to_data(), data);
}

/// A qualified key resolves against the named module and does not disturb
/// the schema context of its unqualified siblings.
#[test]
fn test_namespace_switch_is_local() {
    let registry = registry_of(&[
        r#"
        <module name="m1">
          <prefix value="m1"/>
          <container name="c">
            <leaf name="leaf">
              <description><text>From m1.</text></description>
            </leaf>
          </container>
        </module>"#,
        r#"
        <module name="other">
          <prefix value="other"/>
          <container name="leaf">
            <description><text>From other.</text></description>
          </container>
        </module>"#,
    ]);

    let data = json!({
        "m1:c": {
            "other:leaf": {},
            "leaf": "plain"
        }
    });
    let annotated = annotate_document(&data, &registry);

    let AnnotatedValue::Object(top) = &annotated.value else {
        panic!("expected object");
    };
    let AnnotatedValue::Object(c) = &top["m1:c"].value else {
        panic!("expected object");
    };

    // The qualified key resolved in module `other`.
    assert_eq!(c["other:leaf"].doc.as_deref(), Some("From other."));
    // The sibling still resolved in m1's subtree.
    assert_eq!(c["leaf"].doc.as_deref(), Some("From m1."));
}

/// Documentation found through a grouping expansion survives into the
/// annotated output.
#[test]
fn test_doc_through_grouping_indirection() {
    let registry = registry_of(&[r#"
        <module name="m1">
          <prefix value="m1"/>
          <grouping name="g">
            <leaf name="x">
              <description><text>Declared inside g.</text></description>
            </leaf>
          </grouping>
          <container name="c"><uses name="g"/></container>
        </module>"#]);

    let data = json!({ "m1:c": { "x": 7 } });
    let annotated = annotate_document(&data, &registry);

    assert_eq!(
        annotated.to_view_json(),
        json!({
            "m1:c": {
                "value": {
                    "x": { "value": 7, "doc": "Declared inside g." }
                }
            }
        })
    );
}

/// Keys with no schema match anywhere are reproduced undocumented.
#[test]
fn test_missing_schema_degrades_silently() {
    let registry = registry_of(&[r#"
        <module name="m1">
          <prefix value="m1"/>
          <container name="c"/>
        </module>"#]);

    let data = json!({ "m1:c": { "surprise": [1, 2, 3] } });
    let annotated = annotate_document(&data, &registry);

    assert_eq!(
        annotated.to_view_json(),
        json!({
            "m1:c": {
                "value": {
                    "surprise": {
                        "value": [
                            { "value": 1 },
                            { "value": 2 },
                            { "value": 3 }
                        ]
                    }
                }
            }
        })
    );
}
