/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generation_options;
mod graph_format;
mod graph_request;
mod sbom_request;
mod sbom_response;

pub use generation_options::GenerationOptions;
pub use graph_format::GraphFormat;
pub use graph_request::{GraphRequest, GraphResponse};
pub use sbom_request::SbomRequest;
pub use sbom_response::SbomGenerationResult;
