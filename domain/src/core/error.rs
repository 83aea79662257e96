//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed survey definition: {0}")]
    MalformedDefinition(String),

    #[error("'{0}' key missing")]
    MissingMarker(&'static str),

    #[error("Question '{question}' on page '{page}' has no answers")]
    QuestionWithoutAnswers { page: String, question: String },

    #[error("Page '{0}' has no questions")]
    EmptyPage(String),

    #[error("Survey definition has no question with answer choices")]
    NoValidQuestions,

    #[error("Invalid workflow transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl DomainError {
    /// Check if this error rejects the structure of a survey definition
    pub fn is_definition_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingMarker(_)
                | DomainError::QuestionWithoutAnswers { .. }
                | DomainError::EmptyPage(_)
                | DomainError::NoValidQuestions
        )
    }
}
