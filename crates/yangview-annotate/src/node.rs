//! The annotated output tree.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use yangview_schema::ResolvedNode;

/// One node of the merge output: the original data value, recursively
/// annotated, plus the documentation and schema node that matched it.
///
/// Annotated trees are transient values owned by the caller; the schema
/// references borrow from the registry read-only.
#[derive(Debug, Clone)]
pub struct AnnotatedNode<'a> {
    /// The data value, with compound values annotated recursively.
    pub value: AnnotatedValue<'a>,

    /// Documentation from the matching schema node, when found and
    /// non-empty.
    pub doc: Option<String>,

    /// The schema node used to annotate this value, when one matched.
    pub schema: Option<&'a ResolvedNode>,
}

/// The shape of an annotated value: a closed model in place of the loose
/// "anything object-like" the wire format allows.
#[derive(Debug, Clone)]
pub enum AnnotatedValue<'a> {
    /// A scalar (string, number, boolean, or null).
    Scalar(Value),

    /// An object-shaped value: annotated children keyed by the original
    /// (possibly namespace-qualified) keys.
    Object(BTreeMap<String, AnnotatedNode<'a>>),

    /// A list-shaped value: annotated elements in original order.
    List(Vec<AnnotatedNode<'a>>),
}

impl AnnotatedNode<'_> {
    /// Render this node in the presentation shape: `{ "value": ..., "doc": ... }`,
    /// with `doc` omitted when absent and branch values carrying their
    /// children in the same shape.
    pub fn to_json(&self) -> Value {
        let value = match &self.value {
            AnnotatedValue::Scalar(v) => v.clone(),
            AnnotatedValue::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_json()))
                    .collect(),
            ),
            AnnotatedValue::List(items) => {
                Value::Array(items.iter().map(AnnotatedNode::to_json).collect())
            }
        };

        let mut out = Map::new();
        out.insert("value".to_owned(), value);
        if let Some(doc) = &self.doc {
            out.insert("doc".to_owned(), Value::String(doc.clone()));
        }
        Value::Object(out)
    }

    /// Render for the tree-view consumer, whose top level has the same
    /// layout as a branch node's `value`: the document's children in
    /// presentation shape.
    pub fn to_view_json(&self) -> Value {
        match &self.value {
            AnnotatedValue::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_json()))
                    .collect(),
            ),
            _ => self.to_json(),
        }
    }

    /// Strip all annotations, returning the original data document.
    pub fn to_data(&self) -> Value {
        match &self.value {
            AnnotatedValue::Scalar(v) => v.clone(),
            AnnotatedValue::Object(children) => Value::Object(
                children
                    .iter()
                    .map(|(key, child)| (key.clone(), child.to_data()))
                    .collect(),
            ),
            AnnotatedValue::List(items) => {
                Value::Array(items.iter().map(AnnotatedNode::to_data).collect())
            }
        }
    }
}
