use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested document or graph was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid input, identity collision, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Dependency tree file not found: {path}\n\n💡 Hint: {suggestion}")]
    TreeNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency tree: {path}\nDetails: {details}\n\n💡 Hint: The file must be the JSON dependency tree produced by the scanner")]
    TreeParseError { path: PathBuf, details: String },

    #[error("Failed to parse vulnerability findings: {path}\nDetails: {details}\n\n💡 Hint: The file must be a JSON array of findings")]
    FindingsParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Two distinct packages map to the same SPDX element id
    #[error("SPDX identifier collision: {spdx_id} is claimed by both {first} and {second}\n\n💡 Hint: Package identities must be unique after sanitization; the document was not generated")]
    IdentityCollision {
        spdx_id: String,
        first: String,
        second: String,
    },

    #[error("Cyclic dependency detected: {cycle}\n\n💡 Hint: The resolved dependency tree must be acyclic")]
    CyclicDependency { cycle: String },

    #[error("Invalid package URL: {purl}\nReason: {reason}")]
    InvalidPackageUrl { purl: String, reason: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_tree_not_found_display() {
        let error = SbomError::TreeNotFound {
            path: PathBuf::from("/test/path/dependency-tree.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Dependency tree file not found"));
        assert!(display.contains("/test/path/dependency-tree.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_tree_parse_error_display() {
        let error = SbomError::TreeParseError {
            path: PathBuf::from("/test/tree.json"),
            details: "missing field `version`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse dependency tree"));
        assert!(display.contains("missing field `version`"));
    }

    #[test]
    fn test_identity_collision_display() {
        let error = SbomError::IdentityCollision {
            spdx_id: "SPDXRef-foo-bar-1.0".to_string(),
            first: "foo-bar@1.0".to_string(),
            second: "foo@bar-1.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("SPDX identifier collision"));
        assert!(display.contains("SPDXRef-foo-bar-1.0"));
        assert!(display.contains("foo-bar@1.0"));
        assert!(display.contains("foo@bar-1.0"));
    }

    #[test]
    fn test_cyclic_dependency_display() {
        let error = SbomError::CyclicDependency {
            cycle: "a@1.0.0 -> b@1.0.0 -> a@1.0.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Cyclic dependency detected"));
        assert!(display.contains("a@1.0.0 -> b@1.0.0 -> a@1.0.0"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
