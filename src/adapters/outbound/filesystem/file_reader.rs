use crate::ports::outbound::{DependencyTreeReader, VulnerabilityReader};
use crate::sbom_generation::domain::{DependencyTree, Vulnerability};
use crate::shared::error::SbomError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;
use tracing::debug;

/// FileSystemReader adapter for reading scanner output from the file system
///
/// This adapter implements both DependencyTreeReader and VulnerabilityReader
/// ports. Every read goes through the shared security checks (no symbolic
/// links, regular files only, size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_tree(&self, path: &Path) -> Result<DependencyTree> {
        if !path.exists() {
            return Err(SbomError::TreeNotFound {
                path: path.to_path_buf(),
                suggestion: "Run the dependency scanner first and pass the JSON tree it writes"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked(path, "dependency tree")?;
        let tree: DependencyTree =
            serde_json::from_str(&content).map_err(|e| SbomError::TreeParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        debug!(
            roots = tree.dependencies.len(),
            dev_roots = tree.dev_dependencies.len(),
            packages = tree.packages.len(),
            "read dependency tree from {}",
            path.display()
        );
        Ok(tree)
    }
}

impl VulnerabilityReader for FileSystemReader {
    fn read_findings(&self, path: &Path) -> Result<Vec<Vulnerability>> {
        let content = read_checked(path, "vulnerability findings")?;
        let findings: Vec<Vulnerability> =
            serde_json::from_str(&content).map_err(|e| SbomError::FindingsParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        debug!("read {} finding(s) from {}", findings.len(), path.display());
        Ok(findings)
    }
}
