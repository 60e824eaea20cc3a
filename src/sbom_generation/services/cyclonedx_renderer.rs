use super::SbomContext;
use crate::sbom_generation::domain::documents::cyclonedx::{
    Component, ComponentScope, ComponentType, CycloneDxDocument, Dependency, Metadata,
    OrganizationalEntity, Tool, BOM_FORMAT, SPEC_VERSION,
};
use crate::sbom_generation::domain::package_identity::package_url;
use tracing::debug;

/// CycloneDxRenderer service: builds a CycloneDX 1.5 document from the graph
///
/// `components` come from the canonical package set, `dependencies` from the
/// graph's children lists. The `vulnerabilities` section is left empty; the
/// embedder fills it in when requested.
pub struct CycloneDxRenderer;

impl CycloneDxRenderer {
    pub fn render(context: &SbomContext<'_>) -> CycloneDxDocument {
        CycloneDxDocument {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            serial_number: context.metadata.serial_number(),
            version: 1,
            metadata: Self::metadata(context),
            components: Self::components(context),
            dependencies: Self::dependencies(context),
            vulnerabilities: None,
        }
    }

    fn metadata(context: &SbomContext<'_>) -> Metadata {
        let subject = context.subject;
        let purl = subject.purl();

        Metadata {
            timestamp: context.metadata.timestamp(),
            tools: vec![Tool {
                name: context.metadata.tool_name().to_string(),
                version: context.metadata.tool_version().to_string(),
            }],
            component: Component {
                component_type: ComponentType::Application,
                bom_ref: purl.clone(),
                name: subject.name().to_string(),
                version: subject.version().to_string(),
                purl,
                scope: None,
            },
            supplier: subject.supplier().map(|name| OrganizationalEntity {
                name: name.to_string(),
            }),
        }
    }

    fn components(context: &SbomContext<'_>) -> Vec<Component> {
        context
            .canonical_packages()
            .filter_map(|package| {
                let identity = context.identities.lookup(&package.name, &package.version)?;
                let scope = if package.is_dev_dependency {
                    ComponentScope::Optional
                } else {
                    ComponentScope::Required
                };
                Some(Component {
                    component_type: ComponentType::Library,
                    bom_ref: identity.bom_ref().to_string(),
                    name: identity.name().to_string(),
                    version: identity.version().to_string(),
                    purl: identity.purl().to_string(),
                    scope: Some(scope),
                })
            })
            .collect()
    }

    /// Synthetic root entry first, then one entry per node in table order
    ///
    /// Nodes missing from the package list still get an entry, so their refs
    /// have no matching component. SPDX drops the same edges instead.
    fn dependencies(context: &SbomContext<'_>) -> Vec<Dependency> {
        let graph = context.graph;
        let bom_ref_of = |id: &str| match graph.node(id) {
            Some(node) => package_url(&node.name, &node.version),
            None => id.to_string(),
        };

        let root = Dependency {
            bom_ref: context.subject.purl(),
            depends_on: graph.roots().iter().map(|id| bom_ref_of(id)).collect(),
        };

        std::iter::once(root)
            .chain(graph.nodes().values().map(|node| {
                if context.identities.get(&node.id).is_none() {
                    debug!(
                        "dependency entry for {} has no matching component",
                        node.id
                    );
                }
                Dependency {
                    bom_ref: package_url(&node.name, &node.version),
                    depends_on: node.children.iter().map(|id| bom_ref_of(id)).collect(),
                }
            }))
            .collect()
    }
}
