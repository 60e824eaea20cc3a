//! npm-sbom - SBOM generation for npm projects
//!
//! This library turns a resolved npm dependency tree into a deduplicated
//! dependency graph and renders it as CycloneDX 1.5 or SPDX 2.3 JSON,
//! optionally carrying vulnerability findings in each format's native
//! extension point. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     SystemIdentifierGenerator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let options = GenerationOptions::new(SbomFormat::Spdx).attach_vulnerabilities(true);
//! let request = SbomRequest::new(PathBuf::from("dependency-tree.json"), options)
//!     .with_findings(PathBuf::from("audit.json"));
//! let result = use_case.execute(request)?;
//!
//! println!("{}", result.document_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, TreeFormatter};
    pub use crate::adapters::outbound::system::{
        FixedIdentifierGenerator, SystemIdentifierGenerator,
    };
    pub use crate::application::dto::{
        GenerationOptions, GraphFormat, GraphRequest, GraphResponse, SbomGenerationResult,
        SbomRequest,
    };
    pub use crate::application::use_cases::{BuildGraphUseCase, GenerateSbomUseCase};
    pub use crate::ports::inbound::SbomGenerationPort;
    pub use crate::ports::outbound::{
        DependencyTreeReader, GraphFormatter, IdentifierGenerator, OutputPresenter,
        ProgressReporter, VulnerabilityReader,
    };
    pub use crate::sbom_generation::domain::{
        CycloneDxDocument, DependencyGraph, DependencyNode, DependencyTree, GraphNode,
        IdentityMap, PackageIdentity, PackageInfo, SbomDocument, SbomFormat, SbomMetadata,
        SbomSubject, Severity, SpdxDocument, Vulnerability,
    };
    pub use crate::sbom_generation::services::{
        ComponentStats, GraphBuilder, GraphQuery, GraphStatistics, SbomGenerator,
        VulnerabilityEmbedder,
    };
    pub use crate::shared::error::SbomError;
    pub use crate::shared::Result;
}
