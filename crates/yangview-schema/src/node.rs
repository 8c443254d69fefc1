//! Resolved schema tree nodes.

use std::collections::BTreeMap;
use std::sync::Arc;

use yangview_yin::YinElement;

/// The statement kinds the resolver turns into schema nodes.
///
/// `grouping` appears only transiently: a grouping body is resolved like any
/// other node and then merged away into its referencing node. A finished
/// tree contains `Module` at the root and structural kinds below it, never
/// `Grouping` and never `uses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Grouping,
}

impl NodeKind {
    /// Classify a statement keyword, or `None` for statements that are not
    /// schema nodes (`uses`, `description`, `import`, `prefix`, ...).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "module" => Some(NodeKind::Module),
            "container" => Some(NodeKind::Container),
            "list" => Some(NodeKind::List),
            "leaf" => Some(NodeKind::Leaf),
            "leaf-list" => Some(NodeKind::LeafList),
            "choice" => Some(NodeKind::Choice),
            "grouping" => Some(NodeKind::Grouping),
            _ => None,
        }
    }

    /// The YANG keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::Container => "container",
            NodeKind::List => "list",
            NodeKind::Leaf => "leaf",
            NodeKind::LeafList => "leaf-list",
            NodeKind::Choice => "choice",
            NodeKind::Grouping => "grouping",
        }
    }

    /// Whether statements of this kind shape data instances and therefore
    /// become children of a resolved node.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            NodeKind::Container
                | NodeKind::List
                | NodeKind::Leaf
                | NodeKind::LeafList
                | NodeKind::Choice
        )
    }
}

/// A node of a materialized schema tree.
///
/// Mirrors the shape of data instances: children are keyed by the name a
/// data document would use for them, and every `uses` reference of the raw
/// tree has been replaced by the referenced grouping's children.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    /// The statement's name argument.
    pub name: String,

    /// Statement kind.
    pub kind: NodeKind,

    /// Child nodes keyed by name. Child names are unique by construction;
    /// see the resolver for the precedence rule on collisions.
    pub children: BTreeMap<String, ResolvedNode>,

    /// The raw statement(s) this node was derived from. For a child that was
    /// inlined from a grouping, this is the statement inside the grouping
    /// body, so documentation lookup works unchanged after inlining.
    pub origin: Vec<Arc<YinElement>>,

    /// The `grouping` statement(s) that contributed this node via `uses`.
    /// Empty for directly declared children. Kept separate from [`origin`]
    /// so the most specific declaration stays authoritative.
    ///
    /// [`origin`]: ResolvedNode::origin
    pub inherited_from: Vec<Arc<YinElement>>,
}

impl ResolvedNode {
    pub(crate) fn new(name: String, kind: NodeKind, origin: Arc<YinElement>) -> Self {
        Self {
            name,
            kind,
            children: BTreeMap::new(),
            origin: vec![origin],
            inherited_from: Vec::new(),
        }
    }

    /// Child node by name.
    pub fn child(&self, name: &str) -> Option<&ResolvedNode> {
        self.children.get(name)
    }

    /// Documentation text from this node's originating statements: the
    /// `<description><text>...</text></description>` substatement, when
    /// present and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.origin.iter().find_map(|stmt| {
            let desc = stmt.child_named("description")?;
            let text = desc
                .child_named("text")
                .and_then(|t| t.text())
                .or_else(|| desc.text())?;
            let text = text.trim();
            (!text.is_empty()).then_some(text)
        })
    }
}
