use serde::{Deserialize, Serialize};

/// Severity as reported by the npm audit scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
    /// Any severity label the scanner emits outside the known four
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    /// Maps to the CycloneDX rating severity vocabulary
    pub fn cyclonedx_severity(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vulnerability finding supplied by the external scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub id: String,
    pub severity: Severity,
    /// Affected package name
    pub package: String,
    /// Affected package version
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patched_versions: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
}

impl Vulnerability {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        package: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            package: package.into(),
            version: version.into(),
            title: None,
            patched_versions: None,
            description: String::new(),
            references: Vec::new(),
            cvss_score: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_cvss_score(mut self, score: f64) -> Self {
        self.cvss_score = Some(score);
        self
    }

    pub fn with_patched_versions(mut self, patched: impl Into<String>) -> Self {
        self.patched_versions = Some(patched.into());
        self
    }

    pub fn with_reference(mut self, url: impl Into<String>) -> Self {
        self.references.push(url.into());
        self
    }
}
