use crate::sbom_generation::domain::documents::cyclonedx::{
    Advisory, Affect, Rating, Source, VulnerabilityEntry,
};
use crate::sbom_generation::domain::documents::spdx::{Annotation, AnnotationType};
use crate::sbom_generation::domain::{
    CycloneDxDocument, IdentityMap, SbomDocument, SbomMetadata, SpdxDocument, Vulnerability,
};
use tracing::debug;

/// Rating method recorded alongside a CVSS score
const CVSS_METHOD: &str = "CVSSv31";

/// Source name recorded on every CycloneDX vulnerability entry
const FINDING_SOURCE: &str = "npm";

/// VulnerabilityEmbedder service: attaches scanner findings to a document
///
/// Findings are matched to packages by dedup key. CycloneDX keeps every
/// finding (unmatched ones get an empty `affects` list); SPDX annotations
/// need a resolvable element so unmatched findings are skipped there.
pub struct VulnerabilityEmbedder;

impl VulnerabilityEmbedder {
    /// Embeds findings into either document variant
    ///
    /// Returns the number of entries written to the document.
    pub fn embed(
        document: &mut SbomDocument,
        findings: &[Vulnerability],
        identities: &IdentityMap,
        metadata: &SbomMetadata,
    ) -> usize {
        match document {
            SbomDocument::CycloneDx(doc) => Self::embed_cyclonedx(doc, findings, identities),
            SbomDocument::Spdx(doc) => Self::embed_spdx(doc, findings, identities, metadata),
        }
    }

    pub fn embed_cyclonedx(
        document: &mut CycloneDxDocument,
        findings: &[Vulnerability],
        identities: &IdentityMap,
    ) -> usize {
        if findings.is_empty() {
            return 0;
        }

        let entries: Vec<VulnerabilityEntry> = findings
            .iter()
            .map(|finding| Self::cyclonedx_entry(finding, identities))
            .collect();
        let count = entries.len();
        document.vulnerabilities = Some(entries);
        count
    }

    fn cyclonedx_entry(finding: &Vulnerability, identities: &IdentityMap) -> VulnerabilityEntry {
        let affects = match identities.lookup(&finding.package, &finding.version) {
            Some(identity) => vec![Affect {
                bom_ref: identity.bom_ref().to_string(),
            }],
            None => {
                debug!(
                    "finding {} targets {}@{} which is not a component",
                    finding.id, finding.package, finding.version
                );
                Vec::new()
            }
        };

        let description = match (&finding.title, finding.description.is_empty()) {
            (_, false) => Some(finding.description.clone()),
            (Some(title), true) => Some(title.clone()),
            (None, true) => None,
        };

        VulnerabilityEntry {
            id: finding.id.clone(),
            source: Some(Source {
                name: FINDING_SOURCE.to_string(),
            }),
            ratings: vec![Rating {
                score: finding.cvss_score,
                severity: finding.severity.cyclonedx_severity().to_string(),
                method: finding.cvss_score.map(|_| CVSS_METHOD.to_string()),
            }],
            description,
            recommendation: finding
                .patched_versions
                .as_ref()
                .map(|patched| format!("Upgrade {} to {}", finding.package, patched)),
            advisories: finding
                .references
                .iter()
                .map(|url| Advisory { url: url.clone() })
                .collect(),
            affects,
        }
    }

    pub fn embed_spdx(
        document: &mut SpdxDocument,
        findings: &[Vulnerability],
        identities: &IdentityMap,
        metadata: &SbomMetadata,
    ) -> usize {
        let annotation_date = metadata.timestamp();
        let annotator = metadata.tool_creator();

        let annotations: Vec<Annotation> = findings
            .iter()
            .filter_map(|finding| {
                let Some(identity) = identities.lookup(&finding.package, &finding.version) else {
                    debug!(
                        "skipping annotation for {}: {}@{} is not a package",
                        finding.id, finding.package, finding.version
                    );
                    return None;
                };
                Some(Annotation {
                    spdx_element_id: identity.spdx_id().to_string(),
                    annotation_date: annotation_date.clone(),
                    annotation_type: AnnotationType::Review,
                    annotator: annotator.clone(),
                    comment: Self::annotation_comment(finding),
                })
            })
            .collect();

        let count = annotations.len();
        document.annotations.extend(annotations);
        count
    }

    /// Free-text comment: id and severity, then description and fix if known
    fn annotation_comment(finding: &Vulnerability) -> String {
        let mut comment = format!("{} ({})", finding.id, finding.severity);
        if let Some(title) = &finding.title {
            comment.push_str(": ");
            comment.push_str(title);
        }
        if !finding.description.is_empty() {
            comment.push_str(" - ");
            comment.push_str(&finding.description);
        }
        if let Some(patched) = &finding.patched_versions {
            comment.push_str(&format!(" Patched versions: {}", patched));
        }
        comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::documents::spdx::{CreationInfo, DOCUMENT_ID};
    use crate::sbom_generation::domain::Severity;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap(),
            "npm-sbom".to_string(),
            "0.4.0".to_string(),
            Uuid::nil(),
        )
    }

    fn identities() -> IdentityMap {
        IdentityMap::from_pairs([("lodash", "4.17.21"), ("@babel/core", "7.23.0")]).unwrap()
    }

    fn empty_spdx() -> SpdxDocument {
        SpdxDocument {
            spdx_version: "SPDX-2.3".to_string(),
            data_license: "CC0-1.0".to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: "demo-app-1.0.0".to_string(),
            document_namespace: "https://spdx.org/spdxdocs/test".to_string(),
            creation_info: CreationInfo {
                created: "2024-03-15T08:30:00Z".to_string(),
                creators: vec![],
            },
            packages: vec![],
            relationships: vec![],
            annotations: vec![],
        }
    }

    fn lodash_finding() -> Vulnerability {
        Vulnerability::new("CVE-2024-0001", Severity::High, "lodash", "4.17.21")
            .with_description("Prototype pollution in zipObjectDeep")
            .with_cvss_score(7.4)
            .with_patched_versions(">=4.17.22")
            .with_reference("https://nvd.nist.gov/vuln/detail/CVE-2024-0001")
    }

    #[test]
    fn test_cyclonedx_entry_resolved() {
        let entry = VulnerabilityEmbedder::cyclonedx_entry(&lodash_finding(), &identities());

        assert_eq!(entry.id, "CVE-2024-0001");
        assert_eq!(entry.affects.len(), 1);
        assert_eq!(entry.affects[0].bom_ref, "pkg:npm/lodash@4.17.21");
        assert_eq!(entry.ratings[0].severity, "high");
        assert_eq!(entry.ratings[0].score, Some(7.4));
        assert_eq!(entry.ratings[0].method.as_deref(), Some("CVSSv31"));
        assert_eq!(
            entry.recommendation.as_deref(),
            Some("Upgrade lodash to >=4.17.22")
        );
        assert_eq!(entry.advisories.len(), 1);
        assert_eq!(entry.source.unwrap().name, "npm");
    }

    #[test]
    fn test_cyclonedx_entry_unresolved_has_empty_affects() {
        let finding = Vulnerability::new("GHSA-0000", Severity::Moderate, "left-pad", "1.0.0");
        let entry = VulnerabilityEmbedder::cyclonedx_entry(&finding, &identities());

        assert!(entry.affects.is_empty());
        assert_eq!(entry.ratings[0].severity, "medium");
        assert!(entry.ratings[0].score.is_none());
        assert!(entry.ratings[0].method.is_none());
        assert!(entry.description.is_none());
    }

    #[test]
    fn test_cyclonedx_unknown_severity_maps_to_unknown() {
        let finding = Vulnerability::new("X-1", Severity::Unknown, "lodash", "4.17.21");
        let entry = VulnerabilityEmbedder::cyclonedx_entry(&finding, &identities());
        assert_eq!(entry.ratings[0].severity, "unknown");
    }

    #[test]
    fn test_spdx_annotations_skip_unresolved() {
        let mut doc = empty_spdx();
        let findings = vec![
            lodash_finding(),
            Vulnerability::new("GHSA-0000", Severity::Low, "left-pad", "1.0.0"),
            Vulnerability::new("GHSA-1111", Severity::Critical, "@babel/core", "7.23.0"),
        ];

        let count =
            VulnerabilityEmbedder::embed_spdx(&mut doc, &findings, &identities(), &metadata());

        assert_eq!(count, 2);
        assert_eq!(doc.annotations[0].spdx_element_id, "SPDXRef-lodash-4.17.21");
        assert_eq!(doc.annotations[1].spdx_element_id, "SPDXRef--babel-core-7.23.0");
        assert!(doc
            .annotations
            .iter()
            .all(|a| a.annotation_date == "2024-03-15T08:30:00Z"));
        assert!(doc.annotations.iter().all(|a| a.annotator == "Tool: npm-sbom-0.4.0"));
    }

    #[test]
    fn test_spdx_comment_mentions_id_severity_and_fix() {
        let comment = VulnerabilityEmbedder::annotation_comment(&lodash_finding());

        assert!(comment.starts_with("CVE-2024-0001 (high)"));
        assert!(comment.contains("Prototype pollution"));
        assert!(comment.contains("Patched versions: >=4.17.22"));
    }

    #[test]
    fn test_embed_dispatches_on_document_variant() {
        let mut document = SbomDocument::Spdx(empty_spdx());
        let count = VulnerabilityEmbedder::embed(
            &mut document,
            &[lodash_finding()],
            &identities(),
            &metadata(),
        );

        assert_eq!(count, 1);
        assert_eq!(document.as_spdx().unwrap().annotations.len(), 1);
    }

    #[test]
    fn test_embed_without_findings_adds_nothing() {
        let mut document = SbomDocument::Spdx(empty_spdx());
        assert_eq!(
            VulnerabilityEmbedder::embed(&mut document, &[], &identities(), &metadata()),
            0
        );
        assert!(document.as_spdx().unwrap().annotations.is_empty());
    }
}
