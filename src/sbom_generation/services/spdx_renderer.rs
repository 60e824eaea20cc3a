use super::{GraphQuery, SbomContext};
use crate::sbom_generation::domain::documents::spdx::{
    CreationInfo, ExternalRef, Package, PackagePurpose, Relationship, RelationshipType,
    SpdxDocument, DATA_LICENSE, DOCUMENT_ID, NOASSERTION, ROOT_PACKAGE_ID, SPDX_VERSION,
};
use crate::sbom_generation::domain::PackageIdentity;
use tracing::debug;

/// SpdxRenderer service: builds an SPDX 2.3 document from the graph
///
/// Relationship endpoints are resolved through the identity map. A graph id
/// with no canonical package cannot be referenced by SPDX id, so edges
/// touching it are dropped.
pub struct SpdxRenderer;

impl SpdxRenderer {
    pub fn render(context: &SbomContext<'_>) -> SpdxDocument {
        let subject = context.subject;
        let metadata = context.metadata;

        SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: subject.document_name(),
            document_namespace: metadata.document_namespace(&subject.namespace_slug()),
            creation_info: CreationInfo {
                created: metadata.timestamp(),
                creators: vec![metadata.tool_creator()],
            },
            packages: Self::packages(context),
            relationships: Self::relationships(context),
            annotations: Vec::new(),
        }
    }

    fn packages(context: &SbomContext<'_>) -> Vec<Package> {
        let subject = context.subject;
        let supplier = subject.supplier().map(|name| format!("Organization: {}", name));

        let root = Package {
            spdx_id: ROOT_PACKAGE_ID.to_string(),
            name: subject.name().to_string(),
            version_info: subject.version().to_string(),
            download_location: NOASSERTION.to_string(),
            files_analyzed: false,
            license_concluded: NOASSERTION.to_string(),
            license_declared: NOASSERTION.to_string(),
            copyright_text: NOASSERTION.to_string(),
            supplier,
            primary_package_purpose: PackagePurpose::Application,
            external_refs: vec![ExternalRef::purl(&subject.purl())],
        };

        let libraries = context.canonical_packages().filter_map(|package| {
            let identity = context.identities.lookup(&package.name, &package.version)?;
            Some(Self::library_package(context, identity))
        });

        std::iter::once(root).chain(libraries).collect()
    }

    fn library_package(context: &SbomContext<'_>, identity: &PackageIdentity) -> Package {
        let download_location = context
            .tree
            .resolved_location(identity.name(), identity.version())
            .unwrap_or(NOASSERTION)
            .to_string();

        Package {
            spdx_id: identity.spdx_id().to_string(),
            name: identity.name().to_string(),
            version_info: identity.version().to_string(),
            download_location,
            files_analyzed: false,
            license_concluded: NOASSERTION.to_string(),
            license_declared: NOASSERTION.to_string(),
            copyright_text: NOASSERTION.to_string(),
            supplier: None,
            primary_package_purpose: PackagePurpose::Library,
            external_refs: vec![ExternalRef::purl(identity.purl())],
        }
    }

    /// DESCRIBES, then root DEPENDS_ON each graph root, then one DEPENDS_ON
    /// per distinct edge
    fn relationships(context: &SbomContext<'_>) -> Vec<Relationship> {
        let spdx_ref = |id: &str| context.identities.get(id).map(|i| i.spdx_id().to_string());

        let mut relationships = vec![Relationship::new(
            DOCUMENT_ID,
            RelationshipType::Describes,
            ROOT_PACKAGE_ID,
        )];

        for root in context.graph.roots() {
            match spdx_ref(root) {
                Some(to) => relationships.push(Relationship::new(
                    ROOT_PACKAGE_ID,
                    RelationshipType::DependsOn,
                    &to,
                )),
                None => debug!("dropping root relationship to unresolved package {}", root),
            }
        }

        for (from, to) in GraphQuery::unique_edges(context.graph) {
            match (spdx_ref(from), spdx_ref(to)) {
                (Some(from_ref), Some(to_ref)) => relationships.push(Relationship::new(
                    &from_ref,
                    RelationshipType::DependsOn,
                    &to_ref,
                )),
                _ => debug!("dropping relationship {} -> {}: unresolved endpoint", from, to),
            }
        }

        relationships
    }
}
