use super::GenerationOptions;
use std::path::PathBuf;

/// SbomRequest - request DTO for the SBOM generation use case
///
/// Carries the locations of the scanner output along with the generation
/// options.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the resolved dependency tree JSON
    pub tree_path: PathBuf,
    /// Path to the vulnerability findings JSON, if any
    pub findings_path: Option<PathBuf>,
    pub options: GenerationOptions,
}

impl SbomRequest {
    pub fn new(tree_path: PathBuf, options: GenerationOptions) -> Self {
        Self {
            tree_path,
            findings_path: None,
            options,
        }
    }

    pub fn with_findings(mut self, findings_path: PathBuf) -> Self {
        self.findings_path = Some(findings_path);
        self
    }
}
