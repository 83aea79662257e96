//! Load Inputs use case.
//!
//! Reads the survey definition and the recipient list, then applies the
//! structural checks that must pass before any network call:
//!
//! 1. recipient count ≥ `min_recipients`
//! 2. raw question count ≥ `min_questions` (questions without answers count)

use crate::config::{DEFAULT_MIN_QUESTIONS, DEFAULT_MIN_RECIPIENTS};
use crate::ports::input_source::{InputError, InputSourcePort};
use std::path::PathBuf;
use std::sync::Arc;
use survey_domain::{RecipientList, SurveyDefinition};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadInputsError {
    #[error("Input file not found at '{}': {reason}", path.display())]
    NotFound { path: PathBuf, reason: String },

    #[error("Malformed input in '{}': {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Please provide at least {required} recipient email addresses (found {found})")]
    InsufficientRecipients { found: usize, required: usize },

    #[error("The survey must contain at least {required} questions (found {found})")]
    InsufficientQuestions { found: usize, required: usize },
}

impl From<InputError> for LoadInputsError {
    fn from(error: InputError) -> Self {
        match error {
            InputError::NotFound { path, reason } => LoadInputsError::NotFound { path, reason },
            InputError::Malformed { path, reason } => {
                LoadInputsError::MalformedInput { path, reason }
            }
        }
    }
}

/// Input for the [`LoadInputsUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadInputsInput {
    /// Path to the JSON survey definition.
    pub survey_path: PathBuf,
    /// Path to the line-delimited recipient list.
    pub recipients_path: PathBuf,
}

impl LoadInputsInput {
    pub fn new(survey_path: impl Into<PathBuf>, recipients_path: impl Into<PathBuf>) -> Self {
        Self {
            survey_path: survey_path.into(),
            recipients_path: recipients_path.into(),
        }
    }
}

/// Validated inputs, ready for the survey builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInputs {
    pub definition: SurveyDefinition,
    pub recipients: RecipientList,
    /// Raw question count used by the minimum check.
    pub question_count: usize,
}

/// Use case for reading and validating the workflow inputs.
pub struct LoadInputsUseCase {
    input_source: Arc<dyn InputSourcePort>,
    min_recipients: usize,
    min_questions: usize,
}

impl LoadInputsUseCase {
    pub fn new(input_source: Arc<dyn InputSourcePort>) -> Self {
        Self {
            input_source,
            min_recipients: DEFAULT_MIN_RECIPIENTS,
            min_questions: DEFAULT_MIN_QUESTIONS,
        }
    }

    pub fn with_minimums(mut self, min_recipients: usize, min_questions: usize) -> Self {
        self.min_recipients = min_recipients;
        self.min_questions = min_questions;
        self
    }

    /// Read both inputs and validate them.
    ///
    /// The definition is read before the recipient list; the recipient check
    /// runs before the question check.
    pub fn execute(&self, input: &LoadInputsInput) -> Result<LoadedInputs, LoadInputsError> {
        let definition = self.input_source.read_definition(&input.survey_path)?;
        info!("Survey data loaded from {}", input.survey_path.display());

        let recipients = self.input_source.read_recipients(&input.recipients_path)?;
        debug!(
            "Read {} recipients from {}",
            recipients.len(),
            input.recipients_path.display()
        );

        if recipients.len() < self.min_recipients {
            return Err(LoadInputsError::InsufficientRecipients {
                found: recipients.len(),
                required: self.min_recipients,
            });
        }

        let question_count = definition.question_count();
        if question_count < self.min_questions {
            return Err(LoadInputsError::InsufficientQuestions {
                found: question_count,
                required: self.min_questions,
            });
        }

        debug!(
            "Inputs validated: {} pages, {} questions, {} recipients",
            definition.page_count(),
            question_count,
            recipients.len()
        );

        Ok(LoadedInputs {
            definition,
            recipients,
            question_count,
        })
    }
}
