//! Create Survey use case.
//!
//! Builds a [`SurveyBlueprint`] from the definition and issues exactly one
//! create call. Questions without answers are skipped (lenient) or rejected
//! (strict) before anything is sent.

use crate::ports::progress::WorkflowProgressNotifier;
use crate::ports::survey_service::{ServiceError, SurveyServicePort};
use std::sync::Arc;
use survey_domain::{
    DEFAULT_SURVEY_TITLE, DomainError, FilterPolicy, SkippedQuestion, SurveyBlueprint,
    SurveyDefinition, SurveyId, WorkflowStage,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while creating the survey.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateSurveyError {
    #[error("Invalid survey definition: {0}")]
    InvalidDefinition(DomainError),

    #[error("Error creating survey: {0}")]
    SurveyCreation(ServiceError),
}

/// Result of a successful survey creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSurvey {
    pub id: SurveyId,
    pub title: String,
    pub page_count: usize,
    pub question_count: usize,
    pub skipped: Vec<SkippedQuestion>,
}

/// Use case for creating the remote survey.
pub struct CreateSurveyUseCase {
    service: Arc<dyn SurveyServicePort>,
    title: String,
    policy: FilterPolicy,
}

impl CreateSurveyUseCase {
    pub fn new(service: Arc<dyn SurveyServicePort>) -> Self {
        Self {
            service,
            title: DEFAULT_SURVEY_TITLE.to_string(),
            policy: FilterPolicy::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn execute(
        &self,
        definition: &SurveyDefinition,
        progress: &dyn WorkflowProgressNotifier,
    ) -> Result<CreatedSurvey, CreateSurveyError> {
        let outcome = SurveyBlueprint::build(&self.title, definition, self.policy)
            .map_err(CreateSurveyError::InvalidDefinition)?;

        // The progress notifier shows skips to the operator
        for skipped in &outcome.skipped {
            debug!(
                "Question '{}' on page '{}' has no answers. Skipping.",
                skipped.question, skipped.page
            );
            progress.on_question_skipped(skipped);
        }

        let blueprint = outcome.blueprint;
        debug!(
            "Survey blueprint: {} pages, {} questions ({} policy)",
            blueprint.page_count(),
            blueprint.question_count(),
            self.policy
        );

        progress.on_request_start(WorkflowStage::SurveyCreated);
        let id = self
            .service
            .create_survey(&blueprint)
            .await
            .map_err(CreateSurveyError::SurveyCreation)?;

        info!("Survey '{}' created with ID {}", blueprint.title, id);
        progress.on_survey_created(&blueprint.title, &id);

        Ok(CreatedSurvey {
            id,
            page_count: blueprint.page_count(),
            question_count: blueprint.question_count(),
            title: blueprint.title,
            skipped: outcome.skipped,
        })
    }
}
