use crate::sbom_generation::domain::SbomFormat;
use std::path::PathBuf;

/// Caller-supplied options for one SBOM generation
///
/// `include_dev` is applied to the tree before the graph is built; the graph
/// builder and renderers never filter on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub format: SbomFormat,
    pub include_dev: bool,
    pub attach_vulnerabilities: bool,
    /// Supplier organization recorded in the document metadata
    pub supplier: Option<String>,
    /// Overrides the tree's project name
    pub component_name: Option<String>,
    /// Overrides the tree's project version
    pub component_version: Option<String>,
    /// Where the rendered document is persisted; stdout when absent
    pub output_path: Option<PathBuf>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            format: SbomFormat::CycloneDx,
            include_dev: false,
            attach_vulnerabilities: false,
            supplier: None,
            component_name: None,
            component_version: None,
            output_path: None,
        }
    }
}

impl GenerationOptions {
    pub fn new(format: SbomFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn include_dev(mut self, include_dev: bool) -> Self {
        self.include_dev = include_dev;
        self
    }

    pub fn attach_vulnerabilities(mut self, attach: bool) -> Self {
        self.attach_vulnerabilities = attach;
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn with_component_version(mut self, version: impl Into<String>) -> Self {
        self.component_version = Some(version.into());
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}
