//! # yangview-schema
//!
//! YANG module registry, grouping resolution, and schema materialization.
//!
//! A module's raw YIN statement tree is not the shape of its data instances:
//! reusable `grouping` fragments sit outside the data tree and are pulled in
//! wherever a `uses` statement references them, possibly across module
//! boundaries through import aliases. This crate materializes each registered
//! module into a [`ResolvedNode`] tree that mirrors the shape of real data,
//! with every `uses` reference inlined and every node keeping a
//! back-reference to the raw statements it was derived from, so that
//! documentation lookup keeps working through any number of grouping
//! indirections.
//!
//! The flow is registry-first:
//!
//! 1. [`ModuleRegistry::register`] stores raw modules (pure storage, no
//!    resolution; registering the same name again replaces the entry).
//! 2. [`ModuleRegistry::materialize`] resolves every module's tree.
//! 3. [`Module::resolved`] exposes the materialized tree for consumers such
//!    as the data-tree annotator.

mod error;
mod module;
mod node;
mod resolver;

pub use error::{Result, SchemaError};
pub use module::{Module, ModuleRegistry};
pub use node::{NodeKind, ResolvedNode};
