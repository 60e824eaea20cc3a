use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// SbomMetadata value object carrying the per-call non-deterministic fields
///
/// Everything here is produced once per generation and shared by every part
/// of the rendered document (serial number, namespace, annotation dates).
#[derive(Debug, Clone, PartialEq)]
pub struct SbomMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    serial: Uuid,
}

impl SbomMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
        serial: Uuid,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            serial,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// RFC 3339 timestamp with second precision and a `Z` suffix
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial(&self) -> Uuid {
        self.serial
    }

    /// CycloneDX serial number, `urn:uuid:<uuid>`
    pub fn serial_number(&self) -> String {
        format!("urn:uuid:{}", self.serial)
    }

    /// SPDX document namespace, unique per generation through the serial
    pub fn document_namespace(&self, slug: &str) -> String {
        format!("https://spdx.org/spdxdocs/{}-{}", slug, self.serial)
    }

    /// SPDX creator string for this tool
    pub fn tool_creator(&self) -> String {
        format!("Tool: {}-{}", self.tool_name, self.tool_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_metadata() -> SbomMetadata {
        SbomMetadata::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            "npm-sbom".to_string(),
            "0.1.0".to_string(),
            Uuid::nil(),
        )
    }

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = create_test_metadata();

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "npm-sbom");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(
            metadata.serial_number(),
            "urn:uuid:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_tool_creator() {
        let metadata = create_test_metadata();
        assert_eq!(metadata.tool_creator(), "Tool: npm-sbom-0.1.0");
    }

    #[test]
    fn test_document_namespace_embeds_serial() {
        let metadata = create_test_metadata();
        assert_eq!(
            metadata.document_namespace("demo-app-1.0.0"),
            "https://spdx.org/spdxdocs/demo-app-1.0.0-00000000-0000-0000-0000-000000000000"
        );
    }
}
