use crate::sbom_generation::domain::{DependencyGraph, GraphNode};
use serde::Serialize;
use std::collections::HashSet;

/// Summary counts over a built graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub total_nodes: usize,
    pub direct_dependencies: usize,
    pub transitive_dependencies: usize,
    pub dev_dependencies: usize,
    /// Distinct `(from, to)` pairs
    pub unique_edges: usize,
    pub max_depth: usize,
}

/// GraphQuery service: read-only operations over a DependencyGraph
///
/// None of these operations mutate the graph; they can be called any number
/// of times on the same instance.
pub struct GraphQuery;

impl GraphQuery {
    /// Nodes first encountered at depth 0, in node-table order
    pub fn direct_dependencies(graph: &DependencyGraph) -> Vec<&GraphNode> {
        graph.nodes().values().filter(|n| n.depth == 0).collect()
    }

    /// Nodes first encountered below the roots, in node-table order
    pub fn transitive_dependencies(graph: &DependencyGraph) -> Vec<&GraphNode> {
        graph.nodes().values().filter(|n| n.depth > 0).collect()
    }

    /// First-encounter depth of a node, `None` when the id is unknown
    pub fn depth(graph: &DependencyGraph, id: &str) -> Option<usize> {
        graph.node(id).map(|n| n.depth)
    }

    /// Enumerates every root-to-node path ending at a node named `name`
    ///
    /// Depth-first over `children`, roots in order, children in list order.
    /// Finding a match does not stop the descent, so a package that depends
    /// on another version of itself yields both paths. A node already on the
    /// current path is skipped.
    pub fn find_dependency_paths(graph: &DependencyGraph, name: &str) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();

        for root in graph.roots() {
            Self::collect_paths(graph, root, name, &mut current, &mut paths);
        }

        paths
    }

    fn collect_paths(
        graph: &DependencyGraph,
        id: &str,
        name: &str,
        current: &mut Vec<String>,
        paths: &mut Vec<Vec<String>>,
    ) {
        if current.iter().any(|c| c == id) {
            return;
        }
        let Some(node) = graph.node(id) else {
            return;
        };

        current.push(id.to_string());
        if node.name == name {
            paths.push(current.clone());
        }
        for child in &node.children {
            Self::collect_paths(graph, child, name, current, paths);
        }
        current.pop();
    }

    /// Edge list with repeats removed, first-occurrence order
    pub fn unique_edges(graph: &DependencyGraph) -> Vec<(&str, &str)> {
        let mut seen = HashSet::new();
        graph
            .edges()
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .filter(|edge| seen.insert(*edge))
            .collect()
    }

    pub fn statistics(graph: &DependencyGraph) -> GraphStatistics {
        let nodes = graph.nodes().values();
        GraphStatistics {
            total_nodes: graph.node_count(),
            direct_dependencies: nodes.clone().filter(|n| n.is_direct()).count(),
            transitive_dependencies: nodes.clone().filter(|n| !n.is_direct()).count(),
            dev_dependencies: nodes.clone().filter(|n| n.is_dev_dependency).count(),
            unique_edges: Self::unique_edges(graph).len(),
            max_depth: nodes.map(|n| n.depth).max().unwrap_or(0),
        }
    }
}
