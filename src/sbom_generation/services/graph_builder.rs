use crate::sbom_generation::domain::package_identity::dedup_key;
use crate::sbom_generation::domain::{
    DependencyGraph, DependencyMap, DependencyNode, DependencyTree, GraphNode,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use tracing::debug;

/// GraphBuilder service collapsing a resolved dependency tree into a graph
///
/// The tree may repeat a shared subtree under every parent that depends on
/// it. Nodes are keyed by `name@version` in a flat table, so a repeat only
/// adds edges; it never creates a second node.
///
/// Depth, parent and the dev flag are assigned on first encounter and never
/// revisited. The result therefore depends on traversal order: a package
/// reached at depth 3 through an earlier root keeps depth 3 even if a later
/// root reaches it at depth 1. Likewise a package reachable from both a dev
/// root and a production root takes the flag of whichever root comes first.
pub struct GraphBuilder;

/// Recursion state for one `build` call
struct Traversal<'g> {
    graph: &'g mut DependencyGraph,
    /// Keys on the current root-to-node path
    path: Vec<String>,
}

impl GraphBuilder {
    /// Builds the deduplicated dependency graph for a tree
    ///
    /// Production roots (`dependencies`) are visited first as non-dev, then
    /// dev roots (`devDependencies`) with the dev flag set, both in
    /// declaration order.
    ///
    /// # Errors
    /// Returns `SbomError::CyclicDependency` if a package is reached again
    /// while it is still on the current path. Re-encountering a package on a
    /// different branch (a diamond) is not an error.
    pub fn build(tree: &DependencyTree) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new();

        {
            let mut traversal = Traversal {
                graph: &mut graph,
                path: Vec::new(),
            };
            traversal.visit_roots(&tree.dependencies, false)?;
            traversal.visit_roots(&tree.dev_dependencies, true)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            roots = graph.roots().len(),
            "built dependency graph for {}@{}",
            tree.name,
            tree.version
        );

        Ok(graph)
    }
}

impl Traversal<'_> {
    fn visit_roots(&mut self, roots: &DependencyMap, is_dev: bool) -> Result<()> {
        for node in roots.values() {
            self.graph.add_root(&dedup_key(&node.name, &node.version));
            self.visit(node, 0, None, is_dev)?;
        }
        Ok(())
    }

    fn visit(
        &mut self,
        node: &DependencyNode,
        depth: usize,
        parent: Option<&str>,
        is_dev: bool,
    ) -> Result<()> {
        let key = dedup_key(&node.name, &node.version);

        if self.path.contains(&key) {
            let mut cycle = self.path.clone();
            cycle.push(key);
            return Err(SbomError::CyclicDependency {
                cycle: cycle.join(" -> "),
            }
            .into());
        }

        // first-seen wins: depth, parent and dev flag are never updated
        self.graph.insert_if_absent(GraphNode::new(
            key.clone(),
            node.name.clone(),
            node.version.clone(),
            depth,
            parent.map(String::from),
            is_dev,
        ));

        if let Some(parent) = parent {
            self.graph.link(parent, &key);
        }

        self.path.push(key.clone());
        for child in node.children() {
            self.visit(child, depth + 1, Some(&key), is_dev)?;
        }
        self.path.pop();

        Ok(())
    }
}
