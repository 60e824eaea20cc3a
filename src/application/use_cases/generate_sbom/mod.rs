use crate::application::dto::{GenerationOptions, SbomGenerationResult, SbomRequest};
use crate::ports::inbound::SbomGenerationPort;
use crate::ports::outbound::{
    DependencyTreeReader, IdentifierGenerator, ProgressReporter, VulnerabilityReader,
};
use crate::sbom_generation::domain::{DependencyTree, SbomSubject, Vulnerability};
use crate::sbom_generation::services::{
    GraphBuilder, SbomContext, SbomGenerator, VulnerabilityEmbedder,
};
use crate::shared::Result;
use tracing::{debug, info};

/// Number of progress steps reported while generating a document
const GENERATION_STEPS: usize = 4;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// This use case orchestrates the SBOM generation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `TR` - DependencyTreeReader implementation
/// * `VR` - VulnerabilityReader implementation
/// * `IG` - IdentifierGenerator implementation (serial number and clock)
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<TR, VR, IG, PR> {
    tree_reader: TR,
    vulnerability_reader: VR,
    identifier_generator: IG,
    progress_reporter: PR,
}

impl<TR, VR, IG, PR> GenerateSbomUseCase<TR, VR, IG, PR>
where
    TR: DependencyTreeReader,
    VR: VulnerabilityReader,
    IG: IdentifierGenerator,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        tree_reader: TR,
        vulnerability_reader: VR,
        identifier_generator: IG,
        progress_reporter: PR,
    ) -> Self {
        Self {
            tree_reader,
            vulnerability_reader,
            identifier_generator,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Reads the dependency tree (and the findings file when one is given),
    /// then hands both to [`Self::generate`].
    pub fn execute(&self, request: SbomRequest) -> Result<SbomGenerationResult> {
        let tree = self.read_and_report_tree(&request)?;
        let findings = self.read_findings_if_requested(&request)?;
        self.generate(tree, findings, &request.options)
    }

    /// Generates a document from an in-memory tree and findings
    ///
    /// Dev pruning happens here, before graph construction; the graph
    /// builder and renderers never filter.
    pub fn generate(
        &self,
        tree: DependencyTree,
        findings: Vec<Vulnerability>,
        options: &GenerationOptions,
    ) -> Result<SbomGenerationResult> {
        let tree = Self::apply_dev_filter(tree, options.include_dev);

        self.progress_reporter
            .report_progress(1, GENERATION_STEPS, Some("building dependency graph"));
        let graph = GraphBuilder::build(&tree)?;

        self.progress_reporter
            .report_progress(2, GENERATION_STEPS, Some("canonicalizing identities"));
        let identities = SbomGenerator::build_identities(&tree)?;

        let generated_at = self.identifier_generator.now();
        let metadata = SbomGenerator::generate_default_metadata(
            generated_at,
            self.identifier_generator.serial(),
        );
        let subject = Self::build_subject(&tree, options);

        self.progress_reporter.report_progress(
            3,
            GENERATION_STEPS,
            Some(&format!("rendering {}", options.format)),
        );
        let context = SbomContext {
            tree: &tree,
            graph: &graph,
            identities: &identities,
            metadata: &metadata,
            subject: &subject,
        };
        let mut document = SbomGenerator::render(&context, options.format);

        self.progress_reporter
            .report_progress(4, GENERATION_STEPS, Some("embedding vulnerabilities"));
        let embedded = if options.attach_vulnerabilities {
            VulnerabilityEmbedder::embed(&mut document, &findings, &identities, &metadata)
        } else {
            0
        };
        if embedded > 0 {
            debug!("embedded {} vulnerability entr(ies)", embedded);
        }

        let stats = SbomGenerator::component_stats(&tree);
        info!(
            format = %options.format,
            components = stats.total_components,
            "generated SBOM for {}",
            subject.document_name()
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} document with {} component(s)",
            options.format, stats.total_components
        ));

        Ok(SbomGenerationResult {
            format: options.format,
            document,
            stats,
            vulnerabilities: findings,
            embedded_vulnerabilities: embedded > 0,
            generated_at,
        })
    }

    /// Reads the dependency tree, reporting progress
    fn read_and_report_tree(&self, request: &SbomRequest) -> Result<DependencyTree> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency tree from: {}",
            request.tree_path.display()
        ));

        let tree = self.tree_reader.read_tree(&request.tree_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) in {}@{}",
            tree.packages.len(),
            tree.name,
            tree.version
        ));
        Ok(tree)
    }

    /// Reads findings when attachment is requested and a findings file is set
    fn read_findings_if_requested(&self, request: &SbomRequest) -> Result<Vec<Vulnerability>> {
        let Some(path) = &request.findings_path else {
            if request.options.attach_vulnerabilities {
                self.progress_reporter.report_error(
                    "⚠️  Warning: vulnerabilities were requested but no findings file was given",
                );
            }
            return Ok(Vec::new());
        };

        self.progress_reporter.report(&format!(
            "🔐 Loading vulnerability findings from: {}",
            path.display()
        ));
        let findings = self.vulnerability_reader.read_findings(path)?;
        self.progress_reporter
            .report(&format!("   - {} finding(s) loaded", findings.len()));
        Ok(findings)
    }

    fn apply_dev_filter(tree: DependencyTree, include_dev: bool) -> DependencyTree {
        if include_dev {
            return tree;
        }
        let pruned = tree.without_dev_dependencies();
        let removed = tree.packages.len() - pruned.packages.len();
        if removed > 0 {
            debug!("pruned {} dev package(s) before graph construction", removed);
        }
        pruned
    }

    /// The described component: tree name and version unless overridden
    fn build_subject(tree: &DependencyTree, options: &GenerationOptions) -> SbomSubject {
        let name = options
            .component_name
            .clone()
            .unwrap_or_else(|| tree.name.clone());
        let version = options
            .component_version
            .clone()
            .unwrap_or_else(|| tree.version.clone());

        let subject = SbomSubject::new(name, version);
        match &options.supplier {
            Some(supplier) => subject.with_supplier(supplier.clone()),
            None => subject,
        }
    }
}

impl<TR, VR, IG, PR> SbomGenerationPort for GenerateSbomUseCase<TR, VR, IG, PR>
where
    TR: DependencyTreeReader,
    VR: VulnerabilityReader,
    IG: IdentifierGenerator,
    PR: ProgressReporter,
{
    fn generate_sbom(&self, request: SbomRequest) -> Result<SbomGenerationResult> {
        self.execute(request)
    }
}
