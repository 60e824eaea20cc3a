use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, TreeFormatter};
use crate::application::dto::GraphFormat;
use crate::ports::outbound::GraphFormatter;
use crate::sbom_generation::domain::SbomFormat;

/// Factory for creating graph formatters
///
/// This factory picks the formatter adapter for a `--format` value of the
/// `graph` subcommand. SBOM documents need no formatter; they serialize
/// themselves.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified graph format
    ///
    /// `title` is the heading of the text tree (typically `name@version` of
    /// the project); the other formats ignore it.
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::GraphFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(GraphFormat::Dot, "demo-app@1.0.0");
    /// ```
    pub fn create(format: GraphFormat, title: &str) -> Box<dyn GraphFormatter> {
        match format {
            GraphFormat::Tree => Box::new(TreeFormatter::with_title(title)),
            GraphFormat::Dot => Box::new(DotFormatter::new()),
            GraphFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified graph format
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::dto::GraphFormat;
    /// use npm_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(GraphFormat::Dot);
    /// assert_eq!(message, "📝 Generating Graphviz DOT output...");
    /// ```
    pub fn progress_message(format: GraphFormat) -> &'static str {
        match format {
            GraphFormat::Tree => "📝 Generating dependency tree output...",
            GraphFormat::Dot => "📝 Generating Graphviz DOT output...",
            GraphFormat::Json => "📝 Generating graph JSON output...",
        }
    }

    /// Returns the progress message for an SBOM document format
    pub fn sbom_progress_message(format: SbomFormat) -> &'static str {
        match format {
            SbomFormat::CycloneDx => "📝 Generating CycloneDX 1.5 JSON output...",
            SbomFormat::Spdx => "📝 Generating SPDX 2.3 JSON output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{DependencyNode, DependencyTree};
    use crate::sbom_generation::services::GraphBuilder;

    fn graph() -> crate::sbom_generation::domain::DependencyGraph {
        let tree = DependencyTree::new("demo-app", "1.0.0")
            .with_dependency(DependencyNode::new("lodash", "4.17.21"));
        GraphBuilder::build(&tree).unwrap()
    }

    #[test]
    fn test_create_tree_formatter_uses_title() {
        let formatter = FormatterFactory::create(GraphFormat::Tree, "demo-app@1.0.0");
        let output = formatter.format(&graph()).unwrap();
        assert!(output.starts_with("demo-app@1.0.0"));
    }

    #[test]
    fn test_create_dot_formatter() {
        let formatter = FormatterFactory::create(GraphFormat::Dot, "ignored");
        let output = formatter.format(&graph()).unwrap();
        assert!(output.starts_with("digraph dependencies"));
    }

    #[test]
    fn test_create_json_formatter() {
        let formatter = FormatterFactory::create(GraphFormat::Json, "ignored");
        let output = formatter.format(&graph()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("statistics").is_some());
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(GraphFormat::Tree),
            "📝 Generating dependency tree output..."
        );
        assert_eq!(
            FormatterFactory::sbom_progress_message(SbomFormat::Spdx),
            "📝 Generating SPDX 2.3 JSON output..."
        );
    }
}
