use crate::application::dto::{GraphRequest, GraphResponse};
use crate::ports::outbound::{DependencyTreeReader, ProgressReporter};
use crate::sbom_generation::services::{GraphBuilder, GraphQuery};
use crate::shared::Result;
use tracing::debug;

/// BuildGraphUseCase - reads a tree and returns its deduplicated graph
///
/// Backs the `graph` subcommand. The response carries the statistics and,
/// when a package name is asked about, every path from a root to it.
pub struct BuildGraphUseCase<TR, PR> {
    tree_reader: TR,
    progress_reporter: PR,
}

impl<TR, PR> BuildGraphUseCase<TR, PR>
where
    TR: DependencyTreeReader,
    PR: ProgressReporter,
{
    pub fn new(tree_reader: TR, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency tree from: {}",
            request.tree_path.display()
        ));
        let tree = self.tree_reader.read_tree(&request.tree_path)?;
        let tree = if request.include_dev {
            tree
        } else {
            tree.without_dev_dependencies()
        };

        let graph = GraphBuilder::build(&tree)?;
        let statistics = GraphQuery::statistics(&graph);

        let paths = match &request.why {
            Some(name) => {
                let paths = GraphQuery::find_dependency_paths(&graph, name);
                if paths.is_empty() {
                    self.progress_reporter
                        .report_error(&format!("⚠️  {} is not in the dependency graph", name));
                } else {
                    debug!("found {} path(s) to {}", paths.len(), name);
                }
                paths
            }
            None => Vec::new(),
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Graph built: {} node(s), {} direct, {} transitive",
            statistics.total_nodes,
            statistics.direct_dependencies,
            statistics.transitive_dependencies
        ));

        Ok(GraphResponse {
            project: format!("{}@{}", tree.name, tree.version),
            graph,
            statistics,
            paths,
        })
    }
}
