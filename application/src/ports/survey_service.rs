//! Survey service port
//!
//! Defines the three remote operations the workflow needs. Each call is
//! issued exactly once; the port has no retry semantics.

use async_trait::async_trait;
use survey_domain::{
    CollectorId, CollectorRequest, InvitationBatch, RecipientList, SurveyBlueprint, SurveyId,
};
use thiserror::Error;

/// Errors that can occur during survey service operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    /// HTTP status code, when the service answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Remote survey service
///
/// This port defines how the application layer talks to the survey platform.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SurveyServicePort: Send + Sync {
    /// Create a survey from a blueprint and return its ID
    async fn create_survey(&self, blueprint: &SurveyBlueprint) -> Result<SurveyId, ServiceError>;

    /// Create a collector under an existing survey and return its ID
    async fn create_collector(
        &self,
        survey_id: &SurveyId,
        request: &CollectorRequest,
    ) -> Result<CollectorId, ServiceError>;

    /// Send one invitation per recipient in a single batch
    async fn send_invitations(
        &self,
        collector_id: &CollectorId,
        recipients: &RecipientList,
    ) -> Result<InvitationBatch, ServiceError>;
}
