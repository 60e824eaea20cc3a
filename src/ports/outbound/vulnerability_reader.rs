use crate::sbom_generation::domain::Vulnerability;
use crate::shared::Result;
use std::path::Path;

/// VulnerabilityReader port for loading pre-fetched scanner findings
pub trait VulnerabilityReader {
    /// Reads a findings list
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// findings
    fn read_findings(&self, path: &Path) -> Result<Vec<Vulnerability>>;
}
