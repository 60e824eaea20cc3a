use crate::sbom_generation::domain::{SbomDocument, SbomFormat, Vulnerability};
use crate::sbom_generation::services::ComponentStats;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// SbomGenerationResult - response DTO from the SBOM generation use case
///
/// The `document` is the rendered SBOM; everything else describes the run.
/// Only `document` is written to the output file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbomGenerationResult {
    pub format: SbomFormat,
    pub document: SbomDocument,
    pub stats: ComponentStats,
    /// Findings as they were supplied, whether or not they were embedded
    pub vulnerabilities: Vec<Vulnerability>,
    /// Whether at least one finding was written into the document
    pub embedded_vulnerabilities: bool,
    pub generated_at: DateTime<Utc>,
}

impl SbomGenerationResult {
    /// The document as 2-space indented JSON
    pub fn document_json(&self) -> serde_json::Result<String> {
        self.document.to_json_pretty()
    }
}
