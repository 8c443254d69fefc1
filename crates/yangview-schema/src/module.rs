//! Modules and the module registry.

use std::collections::HashMap;
use std::sync::Arc;

use yangview_yin::YinElement;

use crate::error::{Result, SchemaError};
use crate::node::ResolvedNode;
use crate::resolver::Resolver;

/// A named unit of schema: one YANG module in raw YIN form, plus its
/// materialized schema tree once [`ModuleRegistry::materialize`] has run.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    prefix: Option<String>,
    imports: HashMap<String, String>,
    document: Arc<YinElement>,
    resolved: Option<ResolvedNode>,
}

impl Module {
    /// Wrap a raw YIN document under an explicit registry name.
    ///
    /// The module's own prefix and its import table (local prefix to
    /// imported module name) are read off the document here. That is pure
    /// reading, not resolution; a module with no declared prefix is accepted
    /// at this point and rejected when it is materialized.
    pub fn new(name: impl Into<String>, document: Arc<YinElement>) -> Self {
        let prefix = document
            .child_named("prefix")
            .and_then(|p| p.attribute("value"))
            .map(str::to_owned);

        let mut imports = HashMap::new();
        for import in document.children_named("import") {
            let Some(target) = import.attribute("module") else {
                continue;
            };
            let Some(local) = import
                .child_named("prefix")
                .and_then(|p| p.attribute("value"))
            else {
                continue;
            };
            imports.insert(local.to_owned(), target.to_owned());
        }

        Self {
            name: name.into(),
            prefix,
            imports,
            document,
            resolved: None,
        }
    }

    /// Build a module keyed by the `module` element's own name argument.
    ///
    /// # Errors
    ///
    /// Fails if the document's root is not a `module` statement or carries
    /// no name.
    pub fn from_document(document: Arc<YinElement>) -> Result<Self> {
        if document.name != "module" {
            return Err(SchemaError::NotAModule {
                found: document.name.clone(),
            });
        }
        let name = document
            .attribute("name")
            .ok_or(SchemaError::UnnamedModule)?
            .to_owned();
        Ok(Self::new(name, document))
    }

    /// The registry key for this module.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module's own namespace prefix, if declared.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Import table: local prefix to imported module name.
    pub fn imports(&self) -> &HashMap<String, String> {
        &self.imports
    }

    /// The raw YIN statement tree.
    pub fn document(&self) -> &Arc<YinElement> {
        &self.document
    }

    /// The materialized schema tree, once materialization has run.
    pub fn resolved(&self) -> Option<&ResolvedNode> {
        self.resolved.as_ref()
    }
}

/// The set of loaded schema modules, keyed by module name.
///
/// The registry is the sole owner of all schema structures for a session.
/// Registration is pure storage; resolution happens only when
/// [`materialize`] (or [`materialize_module`]) is called, against the
/// registry contents at that moment.
///
/// [`materialize`]: ModuleRegistry::materialize
/// [`materialize_module`]: ModuleRegistry::materialize_module
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a module. Last write wins; replacing a module drops
    /// any resolved tree the previous entry carried, so a later
    /// materialization sees the new raw document.
    pub fn register(&mut self, module: Module) {
        self.modules.insert(module.name.clone(), module);
    }

    /// Look up a module by name.
    pub fn lookup(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// All registered modules, in unspecified order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Materialize every registered module's schema tree.
    ///
    /// Modules are processed in name order. There is no cross-module
    /// transaction: when one module fails, modules materialized earlier in
    /// this invocation keep their resolved trees and the remainder is
    /// abandoned. Callers needing per-module isolation can call
    /// [`materialize_module`] themselves.
    ///
    /// Re-running on an unchanged registry is idempotent: every module's
    /// tree is recomputed to a deeply equal value.
    ///
    /// [`materialize_module`]: ModuleRegistry::materialize_module
    ///
    /// # Errors
    ///
    /// Fails on structurally invalid modules (no prefix, a `uses` with no
    /// name argument) and on recursive grouping references.
    pub fn materialize(&mut self) -> Result<()> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        names.sort();
        for name in names {
            self.materialize_module(&name)?;
        }
        Ok(())
    }

    /// Materialize a single module, replacing its previous resolved tree.
    ///
    /// # Errors
    ///
    /// Fails if the module is not registered, or for the same structural
    /// reasons as [`materialize`](ModuleRegistry::materialize).
    pub fn materialize_module(&mut self, name: &str) -> Result<&ResolvedNode> {
        let module = self
            .modules
            .get(name)
            .ok_or_else(|| SchemaError::UnknownModule(name.to_owned()))?;
        let tree = Resolver::new(self).resolve_module(module)?;

        // The entry is known to exist; re-borrow mutably to store the tree.
        let module = self.modules.get_mut(name).expect("module is registered");
        Ok(module.resolved.insert(tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yangview_yin::parse;

    #[test]
    fn test_module_metadata_extraction() {
        let doc = parse(
            r#"<module name="m2">
                 <prefix value="m2"/>
                 <import module="m1"><prefix value="q"/></import>
               </module>"#,
        )
        .unwrap();

        let module = Module::from_document(doc).unwrap();
        assert_eq!(module.name(), "m2");
        assert_eq!(module.prefix(), Some("m2"));
        assert_eq!(module.imports().get("q").map(String::as_str), Some("m1"));
        assert!(module.resolved().is_none());
    }

    #[test]
    fn test_from_document_rejects_non_module() {
        let doc = parse(r#"<container name="c"/>"#).unwrap();
        assert_eq!(
            Module::from_document(doc).unwrap_err(),
            SchemaError::NotAModule {
                found: "container".to_string()
            }
        );
    }

    #[test]
    fn test_from_document_rejects_unnamed_module() {
        let doc = parse(r#"<module><prefix value="m"/></module>"#).unwrap();
        assert_eq!(
            Module::from_document(doc).unwrap_err(),
            SchemaError::UnnamedModule
        );
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut registry = ModuleRegistry::new();

        let first = parse(r#"<module name="m"><prefix value="a"/></module>"#).unwrap();
        registry.register(Module::from_document(first).unwrap());

        let second = parse(r#"<module name="m"><prefix value="b"/></module>"#).unwrap();
        registry.register(Module::from_document(second).unwrap());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("m").unwrap().prefix(), Some("b"));
    }

    #[test]
    fn test_materialize_unknown_module() {
        let mut registry = ModuleRegistry::new();
        assert_eq!(
            registry.materialize_module("ghost").unwrap_err(),
            SchemaError::UnknownModule("ghost".to_string())
        );
    }
}
