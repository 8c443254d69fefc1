//! # yangview-yin
//!
//! YIN (YANG-as-XML, RFC 7950 §13) parsing into statement trees.
//!
//! A YANG module served in YIN form is an XML document whose elements are the
//! module's statements: `module`, `container`, `list`, `leaf`, `uses`,
//! `description`, and so on. This crate parses such a document into a tree of
//! [`YinElement`]s that downstream schema resolution can walk and keep
//! references into.
//!
//! ## Design
//!
//! Uses the owned-data-with-reference-counting approach: every element owns
//! its substatements as `Arc<YinElement>`, so a tree derived from this one
//! (for example a resolved schema tree) can hold back-references to the
//! statements it came from without lifetimes or arenas.
//!
//! ## Example
//!
//! ```rust
//! let module = yangview_yin::parse(r#"
//! <module name="example" xmlns="urn:ietf:params:xml:ns:yang:yin:1">
//!   <prefix value="ex"/>
//!   <container name="state"/>
//! </module>"#).unwrap();
//!
//! assert_eq!(module.name, "module");
//! assert_eq!(module.attribute("name"), Some("example"));
//! ```

mod error;
mod parser;
mod types;

pub use error::{Error, Result};
pub use parser::parse;
pub use types::{Span, YinAttribute, YinElement};
