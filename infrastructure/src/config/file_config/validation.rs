//! Input validation configuration from TOML (`[validation]` section)

use serde::{Deserialize, Serialize};
use survey_application::{DEFAULT_MIN_QUESTIONS, DEFAULT_MIN_RECIPIENTS};
use survey_domain::FilterPolicy;

/// Raw validation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValidationConfig {
    /// `"lenient"` skips questions without answers; `"strict"` rejects them
    pub policy: FilterPolicy,
    /// Fewest recipients accepted
    pub min_recipients: usize,
    /// Fewest questions accepted, counted before filtering
    pub min_questions: usize,
}

impl Default for FileValidationConfig {
    fn default() -> Self {
        Self {
            policy: FilterPolicy::default(),
            min_recipients: DEFAULT_MIN_RECIPIENTS,
            min_questions: DEFAULT_MIN_QUESTIONS,
        }
    }
}
