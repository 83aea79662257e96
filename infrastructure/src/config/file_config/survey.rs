//! Survey configuration from TOML (`[survey]` section)

use serde::{Deserialize, Serialize};
use survey_domain::{DEFAULT_COLLECTOR_NAME, DEFAULT_SURVEY_TITLE};

/// Raw survey naming configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSurveyConfig {
    /// Title given to the created survey
    pub title: String,
    /// Name given to the created email collector
    pub collector_name: String,
}

impl Default for FileSurveyConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SURVEY_TITLE.to_string(),
            collector_name: DEFAULT_COLLECTOR_NAME.to_string(),
        }
    }
}
