/// Use cases module containing application business logic orchestration
mod build_graph;
mod generate_sbom;

pub use build_graph::BuildGraphUseCase;
pub use generate_sbom::GenerateSbomUseCase;
