//! Workflow parameters for the survey use cases.
//!
//! [`WorkflowParams`] groups the static parameters that control the survey
//! workflow in [`RunWorkflowUseCase`](crate::use_cases::run_workflow::RunWorkflowUseCase).
//! They are resolved from configuration files and CLI flags by the outer
//! layers.

use serde::{Deserialize, Serialize};
use survey_domain::{DEFAULT_COLLECTOR_NAME, DEFAULT_SURVEY_TITLE, FilterPolicy};

/// Minimum number of recipients required to proceed
pub const DEFAULT_MIN_RECIPIENTS: usize = 2;

/// Minimum number of questions (raw count) required to proceed
pub const DEFAULT_MIN_QUESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowParams {
    /// Title of the created survey.
    pub survey_title: String,
    /// Name of the created email collector.
    pub collector_name: String,
    /// How questions without answers are handled.
    pub policy: FilterPolicy,
    /// Minimum recipient count checked at load time.
    pub min_recipients: usize,
    /// Minimum raw question count checked at load time.
    pub min_questions: usize,
}

impl Default for WorkflowParams {
    fn default() -> Self {
        Self {
            survey_title: DEFAULT_SURVEY_TITLE.to_string(),
            collector_name: DEFAULT_COLLECTOR_NAME.to_string(),
            policy: FilterPolicy::default(),
            min_recipients: DEFAULT_MIN_RECIPIENTS,
            min_questions: DEFAULT_MIN_QUESTIONS,
        }
    }
}

impl WorkflowParams {
    // ==================== Builder Methods ====================

    pub fn with_survey_title(mut self, title: impl Into<String>) -> Self {
        self.survey_title = title.into();
        self
    }

    pub fn with_collector_name(mut self, name: impl Into<String>) -> Self {
        self.collector_name = name.into();
        self
    }

    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_min_recipients(mut self, min: usize) -> Self {
        self.min_recipients = min;
        self
    }

    pub fn with_min_questions(mut self, min: usize) -> Self {
        self.min_questions = min;
        self
    }
}
