//! Configuration file support for npm-sbom.
//!
//! Provides YAML-based configuration through `npm-sbom.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line flags.

use anyhow::{bail, Context};
use npm_sbom::application::dto::GenerationOptions;
use npm_sbom::sbom_generation::domain::SbomFormat;
use npm_sbom::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::GenerateArgs;

pub const CONFIG_FILENAME: &str = "npm-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub include_dev: Option<bool>,
    pub attach_vulnerabilities: Option<bool>,
    pub supplier: Option<String>,
    pub component_name: Option<String>,
    pub component_version: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured SBOM format, if any
    pub fn sbom_format(&self) -> Result<Option<SbomFormat>> {
        match &self.format {
            Some(raw) => raw
                .parse::<SbomFormat>()
                .map(Some)
                .map_err(|e| anyhow::anyhow!("Invalid config: {}", e)),
            None => Ok(None),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    debug!("loaded config from {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Resolves the config for a run: an explicit `--config` path must exist,
/// otherwise the directory holding the tree file is searched.
///
/// Returns the path the config was loaded from alongside it.
pub fn resolve_config(
    explicit: Option<&Path>,
    tree_path: &Path,
) -> Result<Option<(PathBuf, ConfigFile)>> {
    if let Some(path) = explicit {
        return load_config_from_path(path).map(|config| Some((path.to_path_buf(), config)));
    }
    let dir = match tree_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    discover_config(dir)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.sbom_format()?;

    for (field, value) in [
        ("supplier", &config.supplier),
        ("component_name", &config.component_name),
        ("component_version", &config.component_version),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field or give it a value.",
                field
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Merges command-line flags over config values into generation options.
///
/// Boolean flags can only switch a setting on; a config value of `true`
/// stays in effect when the flag is absent.
pub fn merge_options(args: &GenerateArgs, config: Option<&ConfigFile>) -> Result<GenerationOptions> {
    let config_format = match config {
        Some(c) => c.sbom_format()?,
        None => None,
    };
    let format = args.format.or(config_format).unwrap_or(SbomFormat::CycloneDx);

    let include_dev = args.include_dev || config.and_then(|c| c.include_dev).unwrap_or(false);
    let attach = args.attach_vulnerabilities
        || config
            .and_then(|c| c.attach_vulnerabilities)
            .unwrap_or(false);

    let mut options = GenerationOptions::new(format)
        .include_dev(include_dev)
        .attach_vulnerabilities(attach);

    if let Some(supplier) = pick_text(&args.supplier, config.and_then(|c| c.supplier.as_ref())) {
        options = options.with_supplier(supplier);
    }
    if let Some(name) = pick_text(
        &args.component_name,
        config.and_then(|c| c.component_name.as_ref()),
    ) {
        options = options.with_component_name(name);
    }
    if let Some(version) = pick_text(
        &args.component_version,
        config.and_then(|c| c.component_version.as_ref()),
    ) {
        options = options.with_component_version(version);
    }
    if let Some(path) = &args.output {
        options = options.with_output_path(path.clone());
    }

    Ok(options)
}

fn pick_text(cli: &Option<String>, config: Option<&String>) -> Option<String> {
    cli.clone().or_else(|| config.cloned())
}
