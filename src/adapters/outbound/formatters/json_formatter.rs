use crate::ports::outbound::GraphFormatter;
use crate::sbom_generation::domain::DependencyGraph;
use crate::sbom_generation::services::{GraphQuery, GraphStatistics};
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
struct GraphView<'a> {
    statistics: GraphStatistics,
    #[serde(flatten)]
    graph: &'a DependencyGraph,
}

/// JsonFormatter adapter serializing the graph with its statistics
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        let view = GraphView {
            statistics: GraphQuery::statistics(graph),
            graph,
        };
        serde_json::to_string_pretty(&view).map_err(|e| {
            SbomError::OutputGenerationError {
                format: "graph JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
