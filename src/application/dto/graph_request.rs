use crate::sbom_generation::domain::DependencyGraph;
use crate::sbom_generation::services::GraphStatistics;
use std::path::PathBuf;

/// GraphRequest - request DTO for building the graph without rendering an SBOM
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub tree_path: PathBuf,
    pub include_dev: bool,
    /// Package name whose root-to-node paths should be reported
    pub why: Option<String>,
}

impl GraphRequest {
    pub fn new(tree_path: PathBuf, include_dev: bool) -> Self {
        Self {
            tree_path,
            include_dev,
            why: None,
        }
    }

    pub fn with_why(mut self, name: impl Into<String>) -> Self {
        self.why = Some(name.into());
        self
    }
}

/// GraphResponse - the built graph plus query results
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// `name@version` of the project the tree describes
    pub project: String,
    pub graph: DependencyGraph,
    pub statistics: GraphStatistics,
    /// Paths to the package named in the request, empty when none was asked
    pub paths: Vec<Vec<String>>,
}
