//! Summary statistics over a resolved usage tree

use rustc_hash::FxHashSet;

use super::types::{HierarchyNode, UsageStats};

/// Summarize a resolved tree in one depth-first walk, root at depth 1.
///
/// `total_components` counts distinct component names. A circular sentinel
/// carries the name of a component already on its path, so sentinels never
/// change the count; no pseudo-component enters the metrics. Terminates
/// because the tree is already acyclic: cycles were converted to sentinels
/// during resolution.
pub fn summarize(tree: &HierarchyNode) -> UsageStats {
    let mut names: FxHashSet<&str> = FxHashSet::default();
    let mut files: FxHashSet<&str> = FxHashSet::default();
    let mut max_depth = 0;
    let mut leaf_count = 0;

    walk(tree, 1, &mut names, &mut files, &mut max_depth, &mut leaf_count);

    UsageStats {
        total_components: names.len(),
        max_depth,
        leaf_count,
        unique_files: files.len(),
    }
}

fn walk<'tree>(
    node: &'tree HierarchyNode,
    depth: usize,
    names: &mut FxHashSet<&'tree str>,
    files: &mut FxHashSet<&'tree str>,
    max_depth: &mut usize,
    leaf_count: &mut usize,
) {
    names.insert(node.name.as_str());
    if let Some(file) = &node.defined_in {
        files.insert(file.as_str());
    }
    if depth > *max_depth {
        *max_depth = depth;
    }
    if node.children.is_empty() {
        *leaf_count += 1;
    }
    for child in &node.children {
        walk(child, depth + 1, names, files, max_depth, leaf_count);
    }
}
