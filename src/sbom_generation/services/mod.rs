mod cyclonedx_renderer;
mod graph_builder;
mod graph_query;
mod sbom_generator;
mod spdx_renderer;
mod vulnerability_embedder;

pub use cyclonedx_renderer::CycloneDxRenderer;
pub use graph_builder::GraphBuilder;
pub use graph_query::{GraphQuery, GraphStatistics};
pub use sbom_generator::{ComponentStats, SbomContext, SbomGenerator};
pub use spdx_renderer::SpdxRenderer;
pub use vulnerability_embedder::VulnerabilityEmbedder;
