use clap::{Args, Parser, Subcommand};
use npm_sbom::application::dto::GraphFormat;
use npm_sbom::sbom_generation::domain::SbomFormat;
use std::path::PathBuf;

/// Generate CycloneDX and SPDX SBOMs from a resolved npm dependency tree
#[derive(Parser, Debug)]
#[command(name = "npm-sbom")]
#[command(version)]
#[command(about = "Generate SBOMs for npm projects from a resolved dependency tree", long_about = None)]
pub struct Cli {
    /// Increase diagnostic logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an SBOM document (CycloneDX 1.5 or SPDX 2.3 JSON)
    Generate(GenerateArgs),
    /// Render the deduplicated dependency graph
    Graph(GraphArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the dependency tree JSON written by the scanner
    pub tree: PathBuf,

    /// Output format: cyclonedx or spdx (default: cyclonedx, or the config file value)
    #[arg(short, long)]
    pub format: Option<SbomFormat>,

    /// Include dev dependencies in the document
    #[arg(long)]
    pub include_dev: bool,

    /// Embed vulnerability findings into the document
    #[arg(long, requires = "findings")]
    pub attach_vulnerabilities: bool,

    /// Path to the vulnerability findings JSON (array of findings)
    #[arg(long, value_name = "PATH")]
    pub findings: Option<PathBuf>,

    /// Supplier organization recorded on the described component
    #[arg(long)]
    pub supplier: Option<String>,

    /// Override the described component name (defaults to the tree name)
    #[arg(long)]
    pub component_name: Option<String>,

    /// Override the described component version (defaults to the tree version)
    #[arg(long)]
    pub component_version: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to npm-sbom.config.yml next to the tree)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a nil serial number and the Unix epoch for byte-identical output
    #[arg(long)]
    pub reproducible: bool,
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Path to the dependency tree JSON written by the scanner
    pub tree: PathBuf,

    /// Output format: tree, dot or json
    #[arg(short, long, default_value = "tree")]
    pub format: GraphFormat,

    /// Include dev dependencies in the graph
    #[arg(long)]
    pub include_dev: bool,

    /// Print every dependency path leading to the named package
    #[arg(long, value_name = "PACKAGE")]
    pub why: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parses process arguments, leaving exit-code handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
