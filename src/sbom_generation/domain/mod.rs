pub mod dependency_graph;
pub mod dependency_tree;
pub mod documents;
pub mod package_identity;
pub mod sbom_metadata;
pub mod sbom_subject;
pub mod vulnerability;

pub use dependency_graph::{DependencyGraph, GraphNode};
pub use dependency_tree::{DependencyMap, DependencyNode, DependencyTree, PackageInfo};
pub use documents::{CycloneDxDocument, SbomDocument, SbomFormat, SpdxDocument};
pub use package_identity::{IdentityMap, PackageIdentity};
pub use sbom_metadata::SbomMetadata;
pub use sbom_subject::SbomSubject;
pub use vulnerability::{Severity, Vulnerability};
