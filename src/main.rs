mod cli;
mod config;

use cli::{Cli, Command, GenerateArgs, GraphArgs};
use npm_sbom::adapters::outbound::console::StderrProgressReporter;
use npm_sbom::adapters::outbound::filesystem::FileSystemReader;
use npm_sbom::adapters::outbound::system::{FixedIdentifierGenerator, SystemIdentifierGenerator};
use npm_sbom::application::dto::{
    GraphFormat, GraphRequest, GraphResponse, SbomGenerationResult, SbomRequest,
};
use npm_sbom::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use npm_sbom::application::use_cases::{BuildGraphUseCase, GenerateSbomUseCase};
use npm_sbom::ports::outbound::{IdentifierGenerator, ProgressReporter};
use npm_sbom::shared::error::{ExitCode, SbomError};
use npm_sbom::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostic logging to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("npm_sbom={}", default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn progress_reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => run_generate(args, cli.quiet),
        Command::Graph(args) => run_graph(args, cli.quiet),
    }
}

fn run_generate(args: GenerateArgs, quiet: bool) -> Result<()> {
    let reporter = progress_reporter(quiet);
    let config = match config::resolve_config(args.config.as_deref(), &args.tree)? {
        Some((path, config)) => {
            let origin = if args.config.is_some() {
                "Using config file"
            } else {
                "Auto-discovered config file"
            };
            reporter.report(&format!("📄 {}: {}", origin, path.display()));
            Some(config)
        }
        None => None,
    };
    let options = config::merge_options(&args, config.as_ref())?;
    let output_path = options.output_path.clone();

    let mut request = SbomRequest::new(args.tree.clone(), options);
    if let Some(findings) = args.findings {
        request = request.with_findings(findings);
    }

    let result = if args.reproducible {
        generate_with(FixedIdentifierGenerator::epoch(), request, quiet)?
    } else {
        generate_with(SystemIdentifierGenerator::new(), request, quiet)?
    };

    reporter.report(FormatterFactory::sbom_progress_message(result.format));
    reporter.report(&format!(
        "   - Components: {} ({} direct, {} dev)",
        result.stats.total_components,
        result.stats.direct_dependencies,
        result.stats.dev_dependencies
    ));

    let document = result
        .document_json()
        .map_err(|e| SbomError::OutputGenerationError {
            format: result.format.to_string(),
            details: e.to_string(),
        })?;
    let presenter = PresenterFactory::create(PresenterType::from_output(output_path.clone()));
    presenter.present(&document)?;

    if let Some(path) = output_path {
        reporter.report_completion(&format!("✅ SBOM written to {}", path.display()));
    }
    Ok(())
}

fn generate_with<IG: IdentifierGenerator>(
    identifier_generator: IG,
    request: SbomRequest,
    quiet: bool,
) -> Result<SbomGenerationResult> {
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        identifier_generator,
        progress_reporter(quiet),
    );
    use_case.execute(request)
}

fn run_graph(args: GraphArgs, quiet: bool) -> Result<()> {
    let mut request = GraphRequest::new(args.tree.clone(), args.include_dev);
    if let Some(name) = &args.why {
        request = request.with_why(name.clone());
    }

    let use_case = BuildGraphUseCase::new(FileSystemReader::new(), progress_reporter(quiet));
    let response = use_case.execute(request)?;

    let output = match &args.why {
        Some(name) => render_paths(&response, name, args.format)?,
        None => {
            progress_reporter(quiet).report(FormatterFactory::progress_message(args.format));
            FormatterFactory::create(args.format, &response.project).format(&response.graph)?
        }
    };

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&output)
}

/// `--why` output: one `a@1.0.0 > b@2.0.0` line per path, or a JSON array
fn render_paths(response: &GraphResponse, name: &str, format: GraphFormat) -> Result<String> {
    if format == GraphFormat::Json {
        return Ok(serde_json::to_string_pretty(&response.paths)?);
    }
    if response.paths.is_empty() {
        return Ok(format!(
            "{} is not a dependency of {}\n",
            name, response.project
        ));
    }

    let mut output = String::new();
    for path in &response.paths {
        output.push_str(&path.join(" > "));
        output.push('\n');
    }
    Ok(output)
}
