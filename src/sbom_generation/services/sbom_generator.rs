use super::{CycloneDxRenderer, SpdxRenderer};
use crate::sbom_generation::domain::package_identity::dedup_key;
use crate::sbom_generation::domain::{
    DependencyGraph, DependencyTree, IdentityMap, PackageInfo, SbomDocument, SbomFormat,
    SbomMetadata, SbomSubject,
};
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Everything a renderer reads, borrowed for one generation call
#[derive(Debug, Clone, Copy)]
pub struct SbomContext<'a> {
    pub tree: &'a DependencyTree,
    pub graph: &'a DependencyGraph,
    pub identities: &'a IdentityMap,
    pub metadata: &'a SbomMetadata,
    pub subject: &'a SbomSubject,
}

impl<'a> SbomContext<'a> {
    /// Canonical packages in scanner order, first occurrence of each key only
    pub fn canonical_packages(&self) -> impl Iterator<Item = &'a PackageInfo> {
        SbomGenerator::canonical_packages(self.tree)
    }
}

/// Component counts over the canonical package set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStats {
    pub total_components: usize,
    pub direct_dependencies: usize,
    pub dev_dependencies: usize,
}

/// SbomGenerator service for SBOM metadata, identities and document dispatch
///
/// This service contains pure business logic. The timestamp and serial
/// number are passed in so callers control all non-determinism.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata for an explicit tool name and version
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        generated_at: DateTime<Utc>,
        serial: Uuid,
    ) -> SbomMetadata {
        SbomMetadata::new(
            generated_at,
            tool_name.to_string(),
            tool_version.to_string(),
            serial,
        )
    }

    /// Generates SBOM metadata naming this crate as the producing tool
    ///
    /// This uses the compile-time name and version from Cargo.toml
    pub fn generate_default_metadata(generated_at: DateTime<Utc>, serial: Uuid) -> SbomMetadata {
        Self::generate_metadata(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            generated_at,
            serial,
        )
    }

    /// Builds the identity map over the tree's canonical package set
    ///
    /// # Errors
    /// Returns `SbomError::IdentityCollision` when two distinct packages
    /// sanitize to the same SPDX id.
    pub fn build_identities(tree: &DependencyTree) -> Result<IdentityMap> {
        IdentityMap::from_pairs(
            tree.packages
                .iter()
                .map(|p| (p.name.as_str(), p.version.as_str())),
        )
    }

    pub fn canonical_packages(tree: &DependencyTree) -> impl Iterator<Item = &PackageInfo> {
        let mut seen = HashSet::new();
        tree.packages
            .iter()
            .filter(move |p| seen.insert(dedup_key(&p.name, &p.version)))
    }

    pub fn component_stats(tree: &DependencyTree) -> ComponentStats {
        Self::canonical_packages(tree).fold(ComponentStats::default(), |mut stats, p| {
            stats.total_components += 1;
            if p.is_direct {
                stats.direct_dependencies += 1;
            }
            if p.is_dev_dependency {
                stats.dev_dependencies += 1;
            }
            stats
        })
    }

    /// Renders the requested document format without vulnerabilities
    pub fn render(context: &SbomContext<'_>, format: SbomFormat) -> SbomDocument {
        match format {
            SbomFormat::CycloneDx => SbomDocument::CycloneDx(CycloneDxRenderer::render(context)),
            SbomFormat::Spdx => SbomDocument::Spdx(SpdxRenderer::render(context)),
        }
    }
}
