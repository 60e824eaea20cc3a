use indexmap::IndexMap;
use serde::Serialize;

/// A deduplicated package node in the dependency graph
///
/// `depth` and `parent` record the *first* encounter during traversal. A
/// package reachable through several parents keeps whichever was visited
/// first; later encounters only add edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub version: String,
    pub depth: usize,
    pub parent: Option<String>,
    pub children: Vec<String>,
    /// Finding count, filled in by later enrichment; the builder leaves it at 0
    pub vulnerabilities: usize,
    pub is_dev_dependency: bool,
}

impl GraphNode {
    pub fn new(
        id: String,
        name: String,
        version: String,
        depth: usize,
        parent: Option<String>,
        is_dev_dependency: bool,
    ) -> Self {
        Self {
            id,
            name,
            version,
            depth,
            parent,
            children: Vec::new(),
            vulnerabilities: 0,
            is_dev_dependency,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.depth == 0
    }
}

/// DependencyGraph aggregate: node table, edge list and root set
///
/// Nodes live in a flat table keyed by dedup key; edges and children refer
/// to nodes by key only. The edge list may contain the same pair more than
/// once when the source tree repeats a subtree, while `children` lists are
/// deduplicated per parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyGraph {
    nodes: IndexMap<String, GraphNode>,
    edges: Vec<(String, String)>,
    roots: Vec<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &IndexMap<String, GraphNode> {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts the node unless its id is already present; returns whether it
    /// was inserted
    pub(crate) fn insert_if_absent(&mut self, node: GraphNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Records a parent -> child edge and appends the child to the parent's
    /// children list unless already there
    pub(crate) fn link(&mut self, parent: &str, child: &str) {
        self.edges.push((parent.to_string(), child.to_string()));
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            if !parent_node.children.iter().any(|c| c == child) {
                parent_node.children.push(child.to_string());
            }
        }
    }

    pub(crate) fn add_root(&mut self, id: &str) {
        if !self.roots.iter().any(|r| r == id) {
            self.roots.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, depth: usize, parent: Option<&str>) -> GraphNode {
        let (name, version) = id.rsplit_once('@').unwrap();
        GraphNode::new(
            id.to_string(),
            name.to_string(),
            version.to_string(),
            depth,
            parent.map(String::from),
            false,
        )
    }

    #[test]
    fn test_graph_new_is_empty() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.edges().is_empty());
        assert!(graph.roots().is_empty());
    }

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let mut graph = DependencyGraph::new();
        assert!(graph.insert_if_absent(node("a@1.0.0", 0, None)));
        assert!(!graph.insert_if_absent(node("a@1.0.0", 3, Some("x@1.0.0"))));

        let stored = graph.node("a@1.0.0").unwrap();
        assert_eq!(stored.depth, 0);
        assert!(stored.parent.is_none());
        assert_eq!(stored.vulnerabilities, 0);
    }

    #[test]
    fn test_link_dedups_children_but_not_edges() {
        let mut graph = DependencyGraph::new();
        graph.insert_if_absent(node("a@1.0.0", 0, None));
        graph.insert_if_absent(node("b@1.0.0", 1, Some("a@1.0.0")));

        graph.link("a@1.0.0", "b@1.0.0");
        graph.link("a@1.0.0", "b@1.0.0");

        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.node("a@1.0.0").unwrap().children, vec!["b@1.0.0"]);
    }

    #[test]
    fn test_add_root_is_idempotent() {
        let mut graph = DependencyGraph::new();
        graph.add_root("a@1.0.0");
        graph.add_root("b@1.0.0");
        graph.add_root("a@1.0.0");
        assert_eq!(graph.roots(), &["a@1.0.0".to_string(), "b@1.0.0".to_string()]);
    }

    #[test]
    fn test_graph_serializes_with_camel_case_nodes() {
        let mut graph = DependencyGraph::new();
        graph.insert_if_absent(node("a@1.0.0", 0, None));
        graph.add_root("a@1.0.0");

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["roots"][0], "a@1.0.0");
        assert_eq!(value["nodes"]["a@1.0.0"]["isDevDependency"], false);
        assert_eq!(value["nodes"]["a@1.0.0"]["depth"], 0);
    }
}
