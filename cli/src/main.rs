//! CLI entrypoint for survey-invite
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use survey_application::{
    NoProgress, RunWorkflowInput, RunWorkflowUseCase, WorkflowParams, WorkflowProgressNotifier,
};
use survey_domain::{FilterPolicy, OutputFormat, Severity};
use survey_infrastructure::{ConfigLoader, FileConfig, LocalInputSource, SurveyMonkeyClient};
use survey_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the error path too
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting survey-invite");

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let credentials = config
        .api
        .credentials()
        .context("Cannot authenticate with SurveyMonkey")?;

    let params = apply_overrides(config.workflow_params(), &cli)?;
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let (Some(survey_file), Some(recipients_file)) = (&cli.survey_file, &cli.recipients_file)
    else {
        bail!("Both SURVEY_FILE and RECIPIENTS_FILE are required");
    };

    // === Dependency Injection ===
    let service = Arc::new(SurveyMonkeyClient::new(credentials)?);
    let input_source = Arc::new(LocalInputSource::new());
    let use_case = RunWorkflowUseCase::new(input_source, service, params);

    // JSON reports own stdout, so progress lines stay off it
    let progress: Box<dyn WorkflowProgressNotifier> =
        if cli.quiet || format == OutputFormat::Json {
            Box::new(NoProgress)
        } else if std::io::stdout().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

    let input = RunWorkflowInput::new(survey_file.clone(), recipients_file.clone());
    match use_case.execute(input, progress.as_ref()).await {
        Ok(report) => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(abort) => {
            match format {
                OutputFormat::Text => eprint!("{}", ConsoleFormatter::format_abort(&abort)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_abort_json(&abort)),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Install the tracing subscriber; the guard must outlive the run
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path '{}'", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory '{}'", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Log warnings and fail on errors reported by config validation
fn check_config(config: &FileConfig) -> Result<()> {
    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => errors.push(issue.message),
        }
    }

    if !errors.is_empty() {
        bail!("Invalid configuration: {}", errors.join("; "));
    }
    Ok(())
}

/// CLI flags take precedence over configuration
fn apply_overrides(mut params: WorkflowParams, cli: &Cli) -> Result<WorkflowParams> {
    if let Some(title) = &cli.title {
        if title.trim().is_empty() {
            bail!("--title must not be empty");
        }
        params = params.with_survey_title(title.trim());
    }

    if let Some(name) = &cli.collector_name {
        if name.trim().is_empty() {
            bail!("--collector-name must not be empty");
        }
        params = params.with_collector_name(name.trim());
    }

    if cli.strict {
        params = params.with_policy(FilterPolicy::Strict);
    }

    Ok(params)
}
