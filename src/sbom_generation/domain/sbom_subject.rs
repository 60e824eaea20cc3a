use super::package_identity::{package_url, sanitize_spdx_fragment};

/// The application an SBOM describes
///
/// Name and version default to the tree's project and may be overridden by
/// the caller; the supplier is only present when the caller names one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomSubject {
    name: String,
    version: String,
    supplier: Option<String>,
}

impl SbomSubject {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            supplier: None,
        }
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    /// Package URL of the application itself, used as its CycloneDX bom-ref
    pub fn purl(&self) -> String {
        package_url(&self.name, &self.version)
    }

    /// Document name shared by both formats, `<name>-<version>`
    pub fn document_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Filesystem- and URI-safe form of the document name
    pub fn namespace_slug(&self) -> String {
        sanitize_spdx_fragment(&self.document_name())
            .trim_matches('-')
            .to_string()
    }
}
