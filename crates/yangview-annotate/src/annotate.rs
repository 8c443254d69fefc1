//! The annotation walk.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, warn};
use yangview_schema::{ModuleRegistry, ResolvedNode};

use crate::node::{AnnotatedNode, AnnotatedValue};

/// Annotate a whole data document. Top-level keys are expected to carry a
/// `module:localName` qualifier; unqualified top-level keys have no schema
/// context and come out undocumented.
pub fn annotate_document<'a>(data: &Value, registry: &'a ModuleRegistry) -> AnnotatedNode<'a> {
    annotate(data, None, registry)
}

/// Annotate a data node against a schema context (the resolved node believed
/// to describe it, or `None` when none is known).
///
/// The output mirrors the input's shape exactly; schema information is only
/// added. A key with no matching schema node is reproduced without `doc` or
/// schema reference, and a namespace switch applies to the qualified child
/// only, never to its siblings.
pub fn annotate<'a>(
    data: &Value,
    schema: Option<&'a ResolvedNode>,
    registry: &'a ModuleRegistry,
) -> AnnotatedNode<'a> {
    annotate_inner(data, schema, registry, true)
}

fn annotate_inner<'a>(
    data: &Value,
    schema: Option<&'a ResolvedNode>,
    registry: &'a ModuleRegistry,
    attach_doc: bool,
) -> AnnotatedNode<'a> {
    let value = match data {
        Value::Object(entries) => {
            let mut children = BTreeMap::new();
            for (key, child) in entries {
                let child_schema = child_schema(schema, key, registry);
                children.insert(
                    key.clone(),
                    annotate_inner(child, child_schema, registry, true),
                );
            }
            AnnotatedValue::Object(children)
        }
        Value::Array(items) => {
            // Every element of a list shares the list's schema definition.
            // The documentation stays on the list node itself rather than
            // being repeated per element.
            AnnotatedValue::List(
                items
                    .iter()
                    .map(|item| annotate_inner(item, schema, registry, false))
                    .collect(),
            )
        }
        scalar => AnnotatedValue::Scalar(scalar.clone()),
    };

    let doc = if attach_doc {
        schema
            .and_then(ResolvedNode::description)
            .map(str::to_owned)
    } else {
        None
    };

    AnnotatedNode { value, doc, schema }
}

/// The schema node for one data key: through the named module's resolved
/// tree when the key is `module:localName`-qualified, otherwise as a direct
/// child of the current context.
fn child_schema<'a>(
    schema: Option<&'a ResolvedNode>,
    key: &str,
    registry: &'a ModuleRegistry,
) -> Option<&'a ResolvedNode> {
    match key.split_once(':') {
        Some((module_name, local)) => {
            let Some(module) = registry.lookup(module_name) else {
                warn!(key, module = module_name, "no loaded module for qualified key");
                return None;
            };
            let Some(tree) = module.resolved() else {
                warn!(key, module = module_name, "module is not materialized");
                return None;
            };
            tree.child(local)
        }
        None => {
            let Some(schema) = schema else {
                debug!(key, "no schema context for key");
                return None;
            };
            schema.child(key)
        }
    }
}
