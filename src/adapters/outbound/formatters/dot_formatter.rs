use crate::ports::outbound::GraphFormatter;
use crate::sbom_generation::domain::DependencyGraph;
use crate::sbom_generation::services::GraphQuery;
use crate::shared::Result;

/// DotFormatter adapter rendering the graph as a Graphviz digraph
///
/// One edge statement per distinct edge. Dev dependencies are drawn dashed
/// and roots are boxed.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(id: &str) -> String {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut output = String::from("digraph dependencies {\n");
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=ellipse];\n");

        for node in graph.nodes().values() {
            let mut attrs = Vec::new();
            if node.is_direct() {
                attrs.push("shape=box");
            }
            if node.is_dev_dependency {
                attrs.push("style=dashed");
            }
            output.push_str("    ");
            output.push_str(&Self::quote(&node.id));
            if !attrs.is_empty() {
                output.push_str(&format!(" [{}]", attrs.join(", ")));
            }
            output.push_str(";\n");
        }

        for (from, to) in GraphQuery::unique_edges(graph) {
            output.push_str(&format!("    {} -> {};\n", Self::quote(from), Self::quote(to)));
        }

        output.push_str("}\n");
        Ok(output)
    }
}
