mod adapters;
mod application;
mod cli;
mod config;
mod graph_query;
mod ports;
mod shared;

use adapters::outbound::console::StderrDiagnosticsReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use application::dto::{OutputMode, QueryDirection, QueryRequest, DEFAULT_GRAPH_FILE};
use application::factories::{FormatterFactory, FormatterType};
use application::use_cases::QueryDependsUseCase;
use clap::CommandFactory;
use cli::{Args, OutputFormat};
use config::ConfigFile;
use ports::outbound::OutputPresenter;
use shared::error::{DependsError, ExitCode};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        // A bad depth value gets its own exit code plus the usage text.
        if matches!(
            e.downcast_ref::<DependsError>(),
            Some(DependsError::InvalidDepth { .. })
        ) {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", Args::command().render_help());
            process::exit(ExitCode::InvalidDepth.as_i32());
        }

        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments; clap handles -h/-V and malformed
    // options, exiting with code 2 on the latter.
    let args = Args::parse_args();

    // Config file supplies defaults, CLI flags win.
    let config = config::discover_config(Path::new("."))?.unwrap_or_default();

    let max_depth = resolve_depth(args.depth.as_deref(), config.depth)?;
    let format = resolve_format(args.format, &config)?;
    let graph_path = args
        .file
        .clone()
        .or_else(|| config.file.clone())
        .unwrap_or_else(|| DEFAULT_GRAPH_FILE.to_string());

    let request = QueryRequest::builder()
        .graph_path(PathBuf::from(graph_path))
        .pattern(args.package.clone())
        .direction(if args.reverse_deps {
            QueryDirection::Reverse
        } else {
            QueryDirection::Forward
        })
        .mode(if args.tree {
            OutputMode::Tree
        } else {
            OutputMode::Flat
        })
        .max_depth(max_depth)
        .show_parent_deps(args.show_parent_deps || config.show_parent_deps.unwrap_or(false))
        .verbose(args.verbose || config.verbose.unwrap_or(false))
        .build();

    // Create adapters (Dependency Injection)
    let graph_reader = FileSystemReader::new();
    let diagnostics = StderrDiagnosticsReporter::new();

    // Create use case with injected dependencies and execute
    let use_case = QueryDependsUseCase::new(graph_reader, diagnostics);
    let response = use_case.execute(request)?;

    // Convert CLI format to application layer format type
    let formatter_type = match format {
        OutputFormat::Text => FormatterType::Text,
        OutputFormat::Json => FormatterType::Json,
    };

    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Resolves the effective depth bound: the CLI value when given (parsed
/// strictly, so `--depth abc` is reported as a bad depth argument rather
/// than a generic option error), else the config value, else unbounded.
fn resolve_depth(cli_depth: Option<&str>, config_depth: Option<usize>) -> Result<usize> {
    match cli_depth {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            DependsError::InvalidDepth {
                value: raw.to_string(),
            }
            .into()
        }),
        None => Ok(config_depth.unwrap_or(graph_query::services::DEPTH_UNLIMITED)),
    }
}

/// Resolves the effective output format: CLI flag, else config value,
/// else plain text.
fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }

    match &config.format {
        Some(name) => name.parse::<OutputFormat>().map_err(|details| {
            DependsError::ConfigError {
                path: PathBuf::from(config::CONFIG_FILENAME),
                details,
            }
            .into()
        }),
        None => Ok(OutputFormat::Text),
    }
}
