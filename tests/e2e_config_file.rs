/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Copy the demo tree fixture into `dir`, returning the copied path.
fn write_tree(dir: &Path) -> PathBuf {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/demo-tree.json");
    let target = dir.join("dependency-tree.json");
    fs::copy(source, &target).unwrap();
    target
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run(args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("npm-sbom").args(args).output().unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(&dir.path().join("npm-sbom.config.yml"), "format: spdx\n");

        let output = run(&["generate", tree.to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"spdxVersion\": \"SPDX-2.3\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_include_dev_and_supplier() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(
            &dir.path().join("npm-sbom.config.yml"),
            r#"
include_dev: true
supplier: Acme Corp
"#,
        );

        let output = run(&["generate", tree.to_str().unwrap()]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["components"].as_array().unwrap().len(), 7);
        assert_eq!(json["metadata"]["supplier"]["name"], "Acme Corp");
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());

        let output = run(&["generate", tree.to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is CycloneDX
        assert!(stdout.contains("\"bomFormat\": \"CycloneDX\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "component_name: storefront\n");

        let output = run(&[
            "generate",
            tree.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["metadata"]["component"]["name"], "storefront");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Using config file"));
    }

    #[test]
    fn test_explicit_config_missing_is_application_error() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());

        let output = run(&[
            "generate",
            tree.to_str().unwrap(),
            "--config",
            dir.path().join("missing.yml").to_str().unwrap(),
        ]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_config_format_is_application_error() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(&dir.path().join("npm-sbom.config.yml"), "format: markdown\n");

        let output = run(&["generate", tree.to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid format: markdown"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(&dir.path().join("npm-sbom.config.yml"), "format: spdx\n");

        let output = run(&["generate", tree.to_str().unwrap(), "-f", "cyclonedx"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("\"bomFormat\": \"CycloneDX\""));
    }

    #[test]
    fn test_cli_supplier_overrides_config() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(
            &dir.path().join("npm-sbom.config.yml"),
            "supplier: Acme Corp\n",
        );

        let output = run(&["generate", tree.to_str().unwrap(), "--supplier", "Globex"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["metadata"]["supplier"]["name"], "Globex");
    }

    #[test]
    fn test_unknown_config_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        let tree = write_tree(dir.path());
        write_config(
            &dir.path().join("npm-sbom.config.yml"),
            "format: cyclonedx\ncheck_cve: true\n",
        );

        let output = run(&["generate", tree.to_str().unwrap()]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }
}
