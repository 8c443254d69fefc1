//! Error types for module registration and schema resolution.
//!
//! Only structurally invalid input is an error here. A `uses` reference that
//! cannot be satisfied (unknown grouping, unknown import, unloaded module)
//! degrades to "contributes no children" inside the resolver and is reported
//! through tracing, not through this enum.

use thiserror::Error;

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that abort materialization of a module.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The root element of a registered document is not `module`.
    #[error("expected a `module` document, found `{found}`")]
    NotAModule { found: String },

    /// The `module` element carries no `name` argument.
    #[error("module element has no name argument")]
    UnnamedModule,

    /// The module declares no `prefix`, so qualified references within it
    /// cannot be classified as local or imported.
    #[error("module `{module}` declares no prefix")]
    MissingPrefix { module: String },

    /// A `uses` statement with no `name` argument.
    #[error("module `{module}`: `uses` statement at `{path}` has no name argument")]
    MissingUsesName { module: String, path: String },

    /// A grouping that directly or transitively uses itself.
    #[error("recursive grouping `{grouping}` in module `{module}` (via `{path}`)")]
    RecursiveGrouping {
        module: String,
        grouping: String,
        path: String,
    },

    /// A statement the resolver cannot treat as a schema node.
    #[error("module `{module}`: cannot resolve `{keyword}` statement as a schema node")]
    UnsupportedStatement { module: String, keyword: String },

    /// Lookup of a module that was never registered.
    #[error("module `{0}` is not registered")]
    UnknownModule(String),
}
