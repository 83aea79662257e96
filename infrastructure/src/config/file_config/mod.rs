//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod survey;
mod validation;

pub use api::{DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_BASE_URL, FileApiConfig};
pub use output::FileOutputConfig;
pub use survey::FileSurveyConfig;
pub use validation::FileValidationConfig;

use serde::{Deserialize, Serialize};
use survey_application::WorkflowParams;
use survey_domain::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Survey service endpoint and credentials
    pub api: FileApiConfig,
    /// Survey title and collector name
    pub survey: FileSurveyConfig,
    /// Filter policy and load-time minimums
    pub validation: FileValidationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors: empty title, empty collector name, non-http(s) base URL.
    /// Warnings: a zero minimum, which disables its load-time check.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("survey.title", &self.survey.title),
            ("survey.collector_name", &self.survey.collector_name),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyField {
                        field: field.to_string(),
                    },
                    format!("{} must not be empty", field),
                ));
            }
        }

        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "api.base_url".to_string(),
                    value: self.api.base_url.clone(),
                },
                format!(
                    "api.base_url: '{}' is not an http(s) URL",
                    self.api.base_url
                ),
            ));
        }

        for (field, value) in [
            ("validation.min_recipients", self.validation.min_recipients),
            ("validation.min_questions", self.validation.min_questions),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DisabledMinimum {
                        field: field.to_string(),
                    },
                    format!("{} is 0; the check is disabled", field),
                ));
            }
        }

        issues
    }

    /// Convert to the application's workflow parameters.
    pub fn workflow_params(&self) -> WorkflowParams {
        WorkflowParams::default()
            .with_survey_title(self.survey.title.trim())
            .with_collector_name(self.survey.collector_name.trim())
            .with_policy(self.validation.policy)
            .with_min_recipients(self.validation.min_recipients)
            .with_min_questions(self.validation.min_questions)
    }
}
