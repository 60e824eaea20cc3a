use crate::sbom_generation::domain::DependencyGraph;
use crate::shared::Result;

/// GraphFormatter port for rendering a dependency graph as text
///
/// This port abstracts the presentation of the graph itself (indented tree,
/// Graphviz, JSON), separate from the SBOM documents.
pub trait GraphFormatter {
    /// Formats the graph
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &DependencyGraph) -> Result<String>;
}
