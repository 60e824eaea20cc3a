use crate::ports::outbound::GraphFormatter;
use crate::sbom_generation::domain::DependencyGraph;
use crate::shared::Result;
use std::collections::HashSet;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// TreeFormatter adapter rendering the graph as an indented text tree
///
/// Each node is expanded once. Later occurrences of an already expanded node
/// (the shared half of a diamond) are printed with a `(*)` marker and no
/// children, the way `npm ls` does it.
pub struct TreeFormatter {
    title: Option<String>,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self { title: None }
    }

    /// Prints `title` as the top line, usually the project `name@version`
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    fn render_node(
        graph: &DependencyGraph,
        id: &str,
        prefix: &str,
        is_last: bool,
        expanded: &mut HashSet<String>,
        output: &mut String,
    ) {
        output.push_str(prefix);
        output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        output.push_str(id);

        let Some(node) = graph.node(id) else {
            output.push('\n');
            return;
        };
        if node.is_dev_dependency && node.is_direct() {
            output.push_str(" (dev)");
        }
        if !expanded.insert(id.to_string()) {
            if !node.children.is_empty() {
                output.push_str(" (*)");
            }
            output.push('\n');
            return;
        }
        output.push('\n');

        let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            Self::render_node(graph, child, &child_prefix, i + 1 == count, expanded, output);
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TreeFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let mut output = String::new();
        if let Some(title) = &self.title {
            output.push_str(title);
            output.push('\n');
        }
        if graph.roots().is_empty() {
            output.push_str("(no dependencies)\n");
            return Ok(output);
        }

        let mut expanded = HashSet::new();
        let count = graph.roots().len();
        for (i, root) in graph.roots().iter().enumerate() {
            Self::render_node(graph, root, "", i + 1 == count, &mut expanded, &mut output);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{DependencyNode, DependencyTree};
    use crate::sbom_generation::services::GraphBuilder;

    #[test]
    fn test_format_diamond_marks_repeat() {
        let tree = DependencyTree::new("demo-app", "1.0.0")
            .with_dependency(
                DependencyNode::new("package-a", "1.0.0").with_dependency(
                    DependencyNode::new("package-b", "2.0.0")
                        .with_dependency(DependencyNode::new("ms", "2.1.3")),
                ),
            )
            .with_dependency(
                DependencyNode::new("package-c", "1.0.0").with_dependency(
                    DependencyNode::new("package-b", "2.0.0")
                        .with_dependency(DependencyNode::new("ms", "2.1.3")),
                ),
            );
        let graph = GraphBuilder::build(&tree).unwrap();

        let output = TreeFormatter::with_title("demo-app@1.0.0")
            .format(&graph)
            .unwrap();

        let expected = "\
demo-app@1.0.0
├── package-a@1.0.0
│   └── package-b@2.0.0
│       └── ms@2.1.3
└── package-c@1.0.0
    └── package-b@2.0.0 (*)
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_marks_dev_roots() {
        let tree = DependencyTree::new("demo-app", "1.0.0")
            .with_dependency(DependencyNode::new("lodash", "4.17.21"))
            .with_dev_dependency(DependencyNode::new("chalk", "5.3.0"));
        let graph = GraphBuilder::build(&tree).unwrap();

        let output = TreeFormatter::new().format(&graph).unwrap();
        assert_eq!(output, "├── lodash@4.17.21\n└── chalk@5.3.0 (dev)\n");
    }

    #[test]
    fn test_format_empty_graph() {
        let output = TreeFormatter::new().format(&DependencyGraph::new()).unwrap();
        assert_eq!(output, "(no dependencies)\n");
    }
}
