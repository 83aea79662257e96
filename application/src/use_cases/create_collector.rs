//! Create Collector use case.
//!
//! Provisions exactly one email collector for a created survey.

use crate::ports::progress::WorkflowProgressNotifier;
use crate::ports::survey_service::{ServiceError, SurveyServicePort};
use std::sync::Arc;
use survey_domain::{CollectorId, CollectorRequest, SurveyId, WorkflowStage};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while creating the collector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateCollectorError {
    #[error("Error creating collector: {0}")]
    CollectorCreation(ServiceError),
}

/// Use case for creating the email collector.
pub struct CreateCollectorUseCase {
    service: Arc<dyn SurveyServicePort>,
    request: CollectorRequest,
}

impl CreateCollectorUseCase {
    pub fn new(service: Arc<dyn SurveyServicePort>) -> Self {
        Self {
            service,
            request: CollectorRequest::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request = CollectorRequest::email(name);
        self
    }

    /// Create the collector.
    ///
    /// An empty survey ID means the survey stage produced nothing to attach
    /// to; this returns `Ok(None)` without a network call.
    pub async fn execute(
        &self,
        survey_id: &SurveyId,
        progress: &dyn WorkflowProgressNotifier,
    ) -> Result<Option<CollectorId>, CreateCollectorError> {
        if survey_id.is_empty() {
            debug!("No survey ID; skipping collector creation");
            return Ok(None);
        }

        progress.on_request_start(WorkflowStage::CollectorCreated);
        let id = self
            .service
            .create_collector(survey_id, &self.request)
            .await
            .map_err(CreateCollectorError::CollectorCreation)?;

        info!(
            "Collector '{}' created with ID {} for survey {}",
            self.request.name, id, survey_id
        );
        progress.on_collector_created(&id);

        Ok(Some(id))
    }
}
