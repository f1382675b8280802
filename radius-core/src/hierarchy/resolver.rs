//! Cycle-safe used-by tree resolution

use rustc_hash::FxHashSet;

use crate::graph::UsageGraph;

use super::types::{HierarchyNode, RenderSite};

/// Resolve the usage hierarchy for `root`.
///
/// Depth-first expansion over the inverted "is used by" edges: each node's
/// children are the distinct components that render it, in first-seen edge
/// order. The visited set is threaded by value, copied on descend, so only
/// ancestors on the same root-to-node path block re-expansion; the same
/// component may legitimately appear in sibling branches. A child already on
/// the path becomes a terminal sentinel node instead of recursing.
///
/// No depth cap is applied beyond cycle detection: expansion of a large
/// acyclic graph is bounded only by the caller.
///
/// An unknown root is not an error; the result is a single node with no
/// children and no definition site.
pub fn resolve(root: &str, graph: &UsageGraph) -> HierarchyNode {
    let mut visited = FxHashSet::default();
    visited.insert(root.to_string());
    expand(root, graph, &visited)
}

fn expand(name: &str, graph: &UsageGraph, visited: &FxHashSet<String>) -> HierarchyNode {
    let edges = graph.usages_of(name);

    let locations: Vec<RenderSite> = edges
        .iter()
        .map(|edge| RenderSite {
            file: edge.file.clone(),
            line: edge.line,
        })
        .collect();

    // One child per distinct user, never one per edge
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut children = Vec::new();
    for edge in edges {
        if !seen.insert(edge.used_by.as_str()) {
            continue;
        }
        if visited.contains(edge.used_by.as_str()) {
            children.push(HierarchyNode::sentinel(&edge.used_by));
        } else {
            let mut branch_visited = visited.clone();
            branch_visited.insert(edge.used_by.clone());
            children.push(expand(&edge.used_by, graph, &branch_visited));
        }
    }

    HierarchyNode {
        name: name.to_string(),
        defined_in: graph.definition_of(name).map(str::to_string),
        children,
        locations,
        circular: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_count(node: &HierarchyNode) -> usize {
        1 + node.children.iter().map(node_count).sum::<usize>()
    }

    fn sentinel_count(node: &HierarchyNode) -> usize {
        let own = usize::from(node.circular);
        own + node.children.iter().map(sentinel_count).sum::<usize>()
    }

    #[test]
    fn test_unknown_root_resolves_to_empty_tree() {
        let graph = UsageGraph::new();
        let tree = resolve("Nonexistent", &graph);

        assert_eq!(tree.name, "Nonexistent");
        assert_eq!(tree.defined_in, None);
        assert!(tree.children.is_empty());
        assert!(tree.locations.is_empty());
        assert!(!tree.circular);
    }

    #[test]
    fn test_single_user_tree() {
        let mut graph = UsageGraph::new();
        graph.record_definition("Button", "b.tsx");
        graph.record_definition("LoginForm", "l.tsx");
        graph.record_usage("Button", Some("LoginForm"), "l.tsx", 10);

        let tree = resolve("Button", &graph);

        assert_eq!(tree.name, "Button");
        assert_eq!(tree.defined_in.as_deref(), Some("b.tsx"));
        assert_eq!(tree.locations, vec![RenderSite { file: "l.tsx".to_string(), line: 10 }]);
        assert_eq!(tree.children.len(), 1);

        let child = &tree.children[0];
        assert_eq!(child.name, "LoginForm");
        assert_eq!(child.defined_in.as_deref(), Some("l.tsx"));
        assert!(child.children.is_empty());
        assert!(child.locations.is_empty());
    }

    #[test]
    fn test_self_cycle_caps_at_depth_two() {
        let mut graph = UsageGraph::new();
        graph.record_definition("Card", "c.tsx");
        graph.record_usage("Card", Some("Card"), "c.tsx", 5);

        let tree = resolve("Card", &graph);

        assert_eq!(tree.children.len(), 1);
        let child = &tree.children[0];
        assert_eq!(child.name, "Card");
        assert!(child.circular);
        assert!(child.children.is_empty());
    }

    #[test]
    fn test_mutual_cycle_terminates_with_one_sentinel_per_path() {
        let mut graph = UsageGraph::new();
        graph.record_usage("Accordion", Some("TreeView"), "t.tsx", 3);
        graph.record_usage("TreeView", Some("Accordion"), "a.tsx", 7);

        let tree = resolve("Accordion", &graph);

        // Accordion -> TreeView -> Accordion (sentinel)
        assert_eq!(tree.children[0].name, "TreeView");
        assert_eq!(tree.children[0].children[0].name, "Accordion");
        assert!(tree.children[0].children[0].circular);
        assert_eq!(sentinel_count(&tree), 1);
    }

    #[test]
    fn test_duplicate_edges_one_child_many_locations() {
        let mut graph = UsageGraph::new();
        graph.record_usage("Button", Some("Toolbar"), "t.tsx", 4);
        graph.record_usage("Button", Some("Toolbar"), "t.tsx", 19);

        let tree = resolve("Button", &graph);

        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.locations.len(), 2);
        assert_eq!(tree.locations[1].line, 19);
    }

    #[test]
    fn test_children_in_first_seen_order() {
        let mut graph = UsageGraph::new();
        graph.record_usage("Icon", Some("Menu"), "m.tsx", 2);
        graph.record_usage("Icon", Some("Button"), "b.tsx", 8);
        graph.record_usage("Icon", Some("Menu"), "m.tsx", 14);

        let tree = resolve("Icon", &graph);
        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Menu", "Button"]);
    }

    #[test]
    fn test_sibling_branches_do_not_share_visited_sets() {
        // Dialog is rendered by both Settings and Profile; App renders both.
        // App must appear under each branch, not just the first one expanded.
        let mut graph = UsageGraph::new();
        graph.record_usage("Dialog", Some("Settings"), "s.tsx", 1);
        graph.record_usage("Dialog", Some("Profile"), "p.tsx", 1);
        graph.record_usage("Settings", Some("App"), "app.tsx", 5);
        graph.record_usage("Profile", Some("App"), "app.tsx", 9);

        let tree = resolve("Dialog", &graph);

        assert_eq!(tree.children.len(), 2);
        for branch in &tree.children {
            assert_eq!(branch.children.len(), 1);
            assert_eq!(branch.children[0].name, "App");
            assert!(!branch.children[0].circular);
        }
    }

    #[test]
    fn test_acyclic_node_count_matches_reachable_components() {
        // Chain: Leaf <- Mid <- Top, plus a second user of Mid
        let mut graph = UsageGraph::new();
        graph.record_usage("Leaf", Some("Mid"), "m.tsx", 1);
        graph.record_usage("Mid", Some("Top"), "t.tsx", 1);
        graph.record_usage("Mid", Some("Side"), "s.tsx", 1);

        let tree = resolve("Leaf", &graph);

        assert_eq!(node_count(&tree), 4);
        assert_eq!(sentinel_count(&tree), 0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut graph = UsageGraph::new();
        graph.record_definition("Input", "i.tsx");
        graph.record_usage("Input", Some("Search"), "s.tsx", 3);
        graph.record_usage("Input", Some("LoginForm"), "l.tsx", 6);
        graph.record_usage("Search", Some("Header"), "h.tsx", 2);

        let first = resolve("Input", &graph);
        let second = resolve("Input", &graph);
        assert_eq!(first, second);
    }
}
