use crate::application::dto::{SbomGenerationResult, SbomRequest};
use crate::shared::Result;

/// SbomGenerationPort - Inbound port for SBOM generation use case
///
/// This port defines the interface that external adapters (CLI, library
/// callers) use to trigger SBOM generation.
pub trait SbomGenerationPort {
    /// Generates an SBOM document for the dependency tree named in the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The tree or findings file cannot be read or parsed
    /// - The tree contains a dependency cycle
    /// - Two packages collapse onto the same SPDX identifier
    fn generate_sbom(&self, request: SbomRequest) -> Result<SbomGenerationResult>;
}
