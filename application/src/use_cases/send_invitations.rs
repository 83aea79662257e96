//! Send Invitations use case.
//!
//! Dispatches one invitation per recipient in a single batched request.
//! Recipient order is preserved and duplicates are sent as-is.

use crate::ports::progress::WorkflowProgressNotifier;
use crate::ports::survey_service::{ServiceError, SurveyServicePort};
use std::sync::Arc;
use survey_domain::{CollectorId, InvitationBatch, RecipientList, WorkflowStage};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while sending invitations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendInvitationsError {
    #[error("Cannot send invitations: {0}")]
    DispatchPrecondition(String),

    #[error("Error sending invitations: {0}")]
    InvitationDispatch(ServiceError),
}

/// Use case for dispatching the invitation batch.
pub struct SendInvitationsUseCase {
    service: Arc<dyn SurveyServicePort>,
}

impl SendInvitationsUseCase {
    pub fn new(service: Arc<dyn SurveyServicePort>) -> Self {
        Self { service }
    }

    pub async fn execute(
        &self,
        collector_id: Option<&CollectorId>,
        recipients: &RecipientList,
        progress: &dyn WorkflowProgressNotifier,
    ) -> Result<InvitationBatch, SendInvitationsError> {
        let collector_id = match collector_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(SendInvitationsError::DispatchPrecondition(
                    "collector ID is missing".to_string(),
                ));
            }
        };

        if recipients.is_empty() {
            return Err(SendInvitationsError::DispatchPrecondition(
                "recipient list is empty".to_string(),
            ));
        }

        progress.on_request_start(WorkflowStage::InvitationsSent);
        let batch = self
            .service
            .send_invitations(collector_id, recipients)
            .await
            .map_err(SendInvitationsError::InvitationDispatch)?;

        info!(
            "Sent {} invitations through collector {} ({} records created)",
            recipients.len(),
            collector_id,
            batch.len()
        );
        progress.on_invitations_sent(&batch);

        Ok(batch)
    }
}
