//! # yangview-annotate
//!
//! Walks a JSON data document in lock-step with materialized schema trees
//! and pairs every data node with the schema node that describes it, so a
//! presentation layer can show documentation next to live data.
//!
//! The walk is shape-preserving and failure-free by design: the output
//! mirrors the input exactly (same keys, same array lengths, same scalar
//! values), and a key with no matching schema node simply comes out
//! undocumented. Namespace-qualified keys (`module:localName`) switch the
//! schema context to the named module's resolved tree for that subtree only.
//!
//! ```rust
//! use yangview_schema::{Module, ModuleRegistry};
//!
//! let doc = yangview_yin::parse(r#"
//! <module name="m1">
//!   <prefix value="m1"/>
//!   <container name="c"><leaf name="x"/></container>
//! </module>"#).unwrap();
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register(Module::from_document(doc).unwrap());
//! registry.materialize().unwrap();
//!
//! let data = serde_json::json!({ "m1:c": { "x": "hello" } });
//! let annotated = yangview_annotate::annotate_document(&data, &registry);
//! assert_eq!(annotated.to_data(), data);
//! ```

mod annotate;
mod node;

pub use annotate::{annotate, annotate_document};
pub use node::{AnnotatedNode, AnnotatedValue};
