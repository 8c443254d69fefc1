//! Grouping resolution: inlining every `uses` reference of a raw module
//! tree into a materialized schema tree.
//!
//! The owning-module context is threaded through the recursion explicitly,
//! so qualified grouping references (`prefix:name`) are always classified
//! against the module that textually contains the `uses` statement: its own
//! prefix means a local grouping, any other prefix goes through its import
//! table. Groupings may be declared at any nesting level of the owning
//! module, not just at the top.
//!
//! Precedence on name collisions is deterministic: directly declared
//! structural children always win over grouping-inlined children of the same
//! name, regardless of document order. Among several `uses` statements, the
//! later one wins for names no direct child claims.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{trace, warn};
use yangview_yin::YinElement;

use crate::error::{Result, SchemaError};
use crate::module::{Module, ModuleRegistry};
use crate::node::{NodeKind, ResolvedNode};

pub(crate) struct Resolver<'a> {
    registry: &'a ModuleRegistry,
}

/// Recursion stack of groupings currently being inlined, keyed by
/// (module name, grouping name). A revisit means the grouping graph is
/// cyclic; entries are unwound on exit so diamond-shaped reuse stays legal.
type InProgress = HashSet<(String, String)>;

impl<'a> Resolver<'a> {
    pub(crate) fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a module's full schema tree from its root statement.
    pub(crate) fn resolve_module(&self, module: &'a Module) -> Result<ResolvedNode> {
        if module.prefix().is_none() {
            return Err(SchemaError::MissingPrefix {
                module: module.name().to_owned(),
            });
        }
        let mut in_progress = InProgress::new();
        self.resolve_node(module, module.document(), "", &mut in_progress)
    }

    /// Resolve one raw statement into the equivalent node with all `uses`
    /// substatements inlined, recursively.
    fn resolve_node(
        &self,
        module: &'a Module,
        element: &Arc<YinElement>,
        path: &str,
        in_progress: &mut InProgress,
    ) -> Result<ResolvedNode> {
        let Some(kind) = NodeKind::from_keyword(&element.name) else {
            return Err(SchemaError::UnsupportedStatement {
                module: module.name().to_owned(),
                keyword: element.name.clone(),
            });
        };
        let name = element.attribute("name").unwrap_or_default().to_owned();
        let path = format!("{path}/{name}");
        trace!(path = %path, keyword = %element.name, "resolving node");

        let mut node = ResolvedNode::new(name, kind, Arc::clone(element));

        // Structural substatements first.
        for child in &element.children {
            let structural = NodeKind::from_keyword(&child.name)
                .is_some_and(|k| k.is_structural());
            if !structural {
                continue;
            }
            let resolved = self.resolve_node(module, child, &path, in_progress)?;
            node.children.insert(resolved.name.clone(), resolved);
        }
        let direct: HashSet<String> = node.children.keys().cloned().collect();

        // Then `uses` statements, in document order. Directly declared
        // children keep their slot; a later grouping overwrites an earlier
        // one for names no direct child claims.
        for uses in element.children_named("uses") {
            let Some(reference) = uses.attribute("name") else {
                return Err(SchemaError::MissingUsesName {
                    module: module.name().to_owned(),
                    path: path.clone(),
                });
            };
            let Some(grouping) = self.resolve_grouping(module, reference, &path, in_progress)?
            else {
                continue;
            };

            let ResolvedNode {
                children, origin, ..
            } = grouping;
            for (child_name, mut child) in children {
                if direct.contains(&child_name) {
                    continue;
                }
                child.inherited_from = origin.clone();
                node.children.insert(child_name, child);
            }
        }

        Ok(node)
    }

    /// Resolve the grouping a `uses` statement references, or `None` when
    /// the reference cannot be satisfied (in which case it contributes no
    /// children and resolution of the rest of the tree continues).
    fn resolve_grouping(
        &self,
        module: &'a Module,
        reference: &str,
        path: &str,
        in_progress: &mut InProgress,
    ) -> Result<Option<ResolvedNode>> {
        let (target, grouping_name) = match reference.split_once(':') {
            Some((prefix, local)) => {
                if module.prefix() == Some(prefix) {
                    (module, local)
                } else if let Some(imported) = module.imports().get(prefix) {
                    match self.registry.lookup(imported) {
                        Some(target) => (target, local),
                        None => {
                            warn!(
                                module = %module.name(),
                                reference,
                                import = %imported,
                                "uses references a module that is not loaded, skipping"
                            );
                            return Ok(None);
                        }
                    }
                } else {
                    warn!(
                        module = %module.name(),
                        reference,
                        prefix,
                        "no import matches the prefix, skipping uses"
                    );
                    return Ok(None);
                }
            }
            None => (module, reference),
        };

        let key = (target.name().to_owned(), grouping_name.to_owned());
        if !in_progress.insert(key.clone()) {
            return Err(SchemaError::RecursiveGrouping {
                module: target.name().to_owned(),
                grouping: grouping_name.to_owned(),
                path: path.to_owned(),
            });
        }

        let resolved = match find_grouping(target.document(), grouping_name) {
            Some(definition) => {
                let path = format!("{path}/<{grouping_name}>");
                Some(self.resolve_node(target, &definition, &path, in_progress)?)
            }
            None => {
                warn!(
                    module = %target.name(),
                    grouping = grouping_name,
                    "grouping not found, skipping uses"
                );
                None
            }
        };
        in_progress.remove(&key);

        Ok(resolved)
    }
}

/// Depth-first, document-order search for a named `grouping` anywhere below
/// the given statement.
fn find_grouping(element: &Arc<YinElement>, name: &str) -> Option<Arc<YinElement>> {
    for child in &element.children {
        if child.name == "grouping" && child.attribute("name") == Some(name) {
            return Some(Arc::clone(child));
        }
        if let Some(found) = find_grouping(child, name) {
            return Some(found);
        }
    }
    None
}
