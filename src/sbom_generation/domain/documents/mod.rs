//! Strongly-typed SBOM document trees
//!
//! Renderers build these records directly; JSON only appears when a document
//! is serialized at the output boundary.

pub mod cyclonedx;
pub mod spdx;

pub use cyclonedx::CycloneDxDocument;
pub use spdx::SpdxDocument;

use serde::{Deserialize, Serialize};

/// Target SBOM schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SbomFormat {
    CycloneDx,
    Spdx,
}

impl std::str::FromStr for SbomFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cyclonedx" | "cdx" => Ok(SbomFormat::CycloneDx),
            "spdx" => Ok(SbomFormat::Spdx),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'cyclonedx' or 'spdx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SbomFormat::CycloneDx => write!(f, "cyclonedx"),
            SbomFormat::Spdx => write!(f, "spdx"),
        }
    }
}

/// A rendered SBOM document in one of the supported schemas
///
/// Serializes as the bare document (no wrapper tag); the format travels
/// alongside it in the generation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SbomDocument {
    CycloneDx(CycloneDxDocument),
    Spdx(SpdxDocument),
}

impl SbomDocument {
    pub fn format(&self) -> SbomFormat {
        match self {
            SbomDocument::CycloneDx(_) => SbomFormat::CycloneDx,
            SbomDocument::Spdx(_) => SbomFormat::Spdx,
        }
    }

    pub fn as_cyclonedx(&self) -> Option<&CycloneDxDocument> {
        match self {
            SbomDocument::CycloneDx(doc) => Some(doc),
            SbomDocument::Spdx(_) => None,
        }
    }

    pub fn as_spdx(&self) -> Option<&SpdxDocument> {
        match self {
            SbomDocument::Spdx(doc) => Some(doc),
            SbomDocument::CycloneDx(_) => None,
        }
    }

    /// Serializes the document as 2-space indented JSON in renderer key order
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sbom_format_from_str() {
        assert_eq!(SbomFormat::from_str("cyclonedx").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("CycloneDX").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("cdx").unwrap(), SbomFormat::CycloneDx);
        assert_eq!(SbomFormat::from_str("SPDX").unwrap(), SbomFormat::Spdx);
    }

    #[test]
    fn test_sbom_format_from_str_invalid() {
        let error = SbomFormat::from_str("markdown").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("cyclonedx"));
        assert!(error.contains("spdx"));
    }

    #[test]
    fn test_sbom_format_display_and_serde_agree() {
        for format in [SbomFormat::CycloneDx, SbomFormat::Spdx] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format));
        }
    }
}
