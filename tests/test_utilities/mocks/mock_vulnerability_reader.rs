use npm_sbom::prelude::*;
use std::path::Path;

/// Mock VulnerabilityReader returning a fixed list of findings
#[derive(Default)]
pub struct MockVulnerabilityReader {
    findings: Vec<Vulnerability>,
}

impl MockVulnerabilityReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_finding(mut self, finding: Vulnerability) -> Self {
        self.findings.push(finding);
        self
    }
}

impl VulnerabilityReader for MockVulnerabilityReader {
    fn read_findings(&self, _path: &Path) -> Result<Vec<Vulnerability>> {
        Ok(self.findings.clone())
    }
}
