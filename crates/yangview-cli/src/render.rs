//! Plain-text rendering of resolved schema trees and annotated documents.

use yangview_annotate::{AnnotatedNode, AnnotatedValue};
use yangview_schema::ResolvedNode;

/// Render a module's materialized schema tree, one statement per line.
pub fn render_schema(module_name: &str, tree: &ResolvedNode) -> String {
    let mut out = format!("module {module_name}\n");
    for child in tree.children.values() {
        write_schema_node(&mut out, child, 1);
    }
    out
}

fn write_schema_node(out: &mut String, node: &ResolvedNode, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{} {}", node.kind.keyword(), node.name));
    if let Some(grouping) = node
        .inherited_from
        .first()
        .and_then(|stmt| stmt.attribute("name"))
    {
        out.push_str(&format!(" (from {grouping})"));
    }
    if let Some(doc) = node.description() {
        out.push_str(&format!("  # {}", squash(doc)));
    }
    out.push('\n');

    for child in node.children.values() {
        write_schema_node(out, child, depth + 1);
    }
}

/// Render an annotated document as an indented tree with documentation.
pub fn render_annotated(root: &AnnotatedNode) -> String {
    let mut out = String::new();
    match &root.value {
        AnnotatedValue::Object(children) => {
            for (key, child) in children {
                write_annotated_node(&mut out, key, child, 0);
            }
        }
        _ => write_annotated_node(&mut out, "", root, 0),
    }
    out
}

fn write_annotated_node(out: &mut String, key: &str, node: &AnnotatedNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let doc = node
        .doc
        .as_deref()
        .map(|d| format!("  # {}", squash(d)))
        .unwrap_or_default();

    match &node.value {
        AnnotatedValue::Scalar(v) => {
            out.push_str(&format!("{indent}{key}: {v}{doc}\n"));
        }
        AnnotatedValue::Object(children) => {
            out.push_str(&format!("{indent}{key}{doc}\n"));
            for (child_key, child) in children {
                write_annotated_node(out, child_key, child, depth + 1);
            }
        }
        AnnotatedValue::List(items) => {
            out.push_str(&format!("{indent}{key}{doc}\n"));
            for (index, item) in items.iter().enumerate() {
                write_annotated_node(out, &format!("[{index}]"), item, depth + 1);
            }
        }
    }
}

/// Collapse a documentation string onto one line.
fn squash(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
