//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use survey_domain::OutputFormat;

/// Format of the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for survey-invite
#[derive(Parser, Debug)]
#[command(name = "survey-invite")]
#[command(author, version, about = "Create a SurveyMonkey survey and email it to a recipient list")]
#[command(long_about = r#"
Survey Invite creates a survey from a JSON definition, attaches an email
collector to it, and sends one invitation per recipient.

The survey definition is a JSON object of the form:
  {"Survey_Name": {"<page>": {"<question>": {"Description": "...", "Answers": ["..."]}}}}

The recipient file holds one email address per line.

The access token is read from the SURVEYMONKEY_ACCESS_TOKEN environment
variable unless configured otherwise.

Configuration files are loaded from (in priority order):
1. SURVEY_INVITE_* environment variables
2. --config <path>            Explicit config file
3. ./survey-invite.toml       Project-level config
4. ~/.config/survey-invite/config.toml   Global config

Example:
  survey-invite questions.json emails.txt
  survey-invite --strict --title "Team Pulse" -o json questions.json emails.txt
"#)]
pub struct Cli {
    /// Path to the survey definition (JSON)
    #[arg(value_name = "SURVEY_FILE", required_unless_present = "show_config")]
    pub survey_file: Option<PathBuf>,

    /// Path to the recipient list (one address per line)
    #[arg(value_name = "RECIPIENTS_FILE", required_unless_present = "show_config")]
    pub recipients_file: Option<PathBuf>,

    /// Reject questions without answers instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Title of the created survey
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Name of the created email collector
    #[arg(long, value_name = "NAME")]
    pub collector_name: Option<String>,

    /// Output format of the final report
    #[arg(short, long, value_enum)]
    pub output: Option<ReportFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
