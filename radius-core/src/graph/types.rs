//! Usage graph types and operations

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Where a component is defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Component name
    pub name: String,
    /// Defining file, relative to the scan root
    pub file: String,
}

/// One observed render of a component by another component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEdge {
    /// The component being rendered
    pub component: String,
    /// The component doing the rendering
    pub used_by: String,
    /// File containing the render site
    pub file: String,
    /// 1-based line of the render site
    pub line: u32,
}

/// Directed multigraph over component names, indexed for "who uses X" queries.
///
/// Cycles are expected and legal; two components may render each other.
/// Duplicate (component, used_by) pairs are kept as separate edges, one per
/// render site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageGraph {
    definitions: FxHashMap<String, Definition>,
    usages: FxHashMap<String, Vec<UsageEdge>>,
}

impl UsageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition site; a later definition for the same name wins
    pub fn record_definition(&mut self, name: &str, file: &str) {
        self.definitions.insert(
            name.to_string(),
            Definition {
                name: name.to_string(),
                file: file.to_string(),
            },
        );
    }

    /// Record a usage edge. References with no enclosing definition
    /// (`used_by` is None) are dropped; top-level renders are not tracked.
    pub fn record_usage(&mut self, component: &str, used_by: Option<&str>, file: &str, line: u32) {
        let Some(used_by) = used_by else {
            return;
        };
        self.usages
            .entry(component.to_string())
            .or_default()
            .push(UsageEdge {
                component: component.to_string(),
                used_by: used_by.to_string(),
                file: file.to_string(),
                line,
            });
    }

    /// The file defining `name`, if any definition was recorded
    pub fn definition_of(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(|d| d.file.as_str())
    }

    /// All edges recording renders of `name`, in insertion order
    pub fn usages_of(&self, name: &str) -> &[UsageEdge] {
        self.usages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of components with a recorded definition
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Total usage edges across all components
    pub fn edge_count(&self) -> usize {
        self.usages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.usages.is_empty()
    }
}
