//! Hierarchy types

use serde::{Deserialize, Serialize};

/// A concrete render site: where a component is referenced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSite {
    pub file: String,
    pub line: u32,
}

/// One node in a resolved usage tree.
///
/// Children are the components that render this node's component, one child
/// per distinct user in first-seen order. A node with `circular: true` is a
/// terminal sentinel: its component already appears on the path from the
/// root, so expansion stopped there instead of recursing.
///
/// The tree is a per-query projection of the graph: built fresh by
/// [`resolve`](crate::hierarchy::resolve), never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Component name
    pub name: String,
    /// File defining the component, if a definition was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_in: Option<String>,
    /// Components rendering this one
    pub children: Vec<HierarchyNode>,
    /// Every site where this component is rendered, in graph insertion order
    pub locations: Vec<RenderSite>,
    /// Terminal marker for a path that would revisit a component
    pub circular: bool,
}

impl HierarchyNode {
    /// The terminal node emitted when expansion would revisit `name`
    pub(crate) fn sentinel(name: &str) -> Self {
        Self {
            name: name.to_string(),
            defined_in: None,
            children: Vec::new(),
            locations: Vec::new(),
            circular: true,
        }
    }
}

/// Summary metrics over one resolved tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Distinct component names across all nodes
    pub total_components: usize,
    /// Depth of the deepest node, root at depth 1
    pub max_depth: usize,
    /// Nodes with no children (circular sentinels included)
    pub leaf_count: usize,
    /// Distinct defining files across all nodes
    pub unique_files: usize,
}
