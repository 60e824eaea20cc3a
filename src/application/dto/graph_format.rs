/// Rendering of the dependency graph itself
///
/// Both the CLI (inbound adapter) and the graph formatters (outbound
/// adapters) need to understand it, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Indented text tree (default)
    Tree,
    /// Graphviz digraph
    Dot,
    /// Serialized graph with statistics
    Json,
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" | "text" => Ok(GraphFormat::Tree),
            "dot" | "graphviz" => Ok(GraphFormat::Dot),
            "json" => Ok(GraphFormat::Json),
            _ => Err(format!(
                "Invalid graph format: {}. Please specify 'tree', 'dot' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::Tree => write!(f, "tree"),
            GraphFormat::Dot => write!(f, "dot"),
            GraphFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_graph_format_from_str() {
        assert_eq!(GraphFormat::from_str("tree").unwrap(), GraphFormat::Tree);
        assert_eq!(GraphFormat::from_str("TEXT").unwrap(), GraphFormat::Tree);
        assert_eq!(GraphFormat::from_str("dot").unwrap(), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_str("Graphviz").unwrap(), GraphFormat::Dot);
        assert_eq!(GraphFormat::from_str("json").unwrap(), GraphFormat::Json);
    }

    #[test]
    fn test_graph_format_from_str_invalid() {
        let error = GraphFormat::from_str("markdown").unwrap_err();
        assert!(error.contains("Invalid graph format"));
        assert!(error.contains("markdown"));
    }

    #[test]
    fn test_graph_format_display_round_trips() {
        for format in [GraphFormat::Tree, GraphFormat::Dot, GraphFormat::Json] {
            assert_eq!(GraphFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
