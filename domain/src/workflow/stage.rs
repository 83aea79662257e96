//! Workflow stage state machine
//!
//! ```text
//! Loading -> Validated -> SurveyCreated -> CollectorCreated -> InvitationsSent
//!    \           \              \                 \
//!     +-----------+--------------+-----------------+--> Aborted
//! ```
//!
//! `InvitationsSent` and `Aborted` are terminal.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Reading and validating the input files
    Loading,
    /// Inputs passed structural validation
    Validated,
    /// Remote survey exists
    SurveyCreated,
    /// Email collector exists under the survey
    CollectorCreated,
    /// Invitations dispatched
    InvitationsSent,
    /// A stage failed; nothing further runs
    Aborted,
}

impl WorkflowStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Loading => "loading",
            WorkflowStage::Validated => "validated",
            WorkflowStage::SurveyCreated => "survey_created",
            WorkflowStage::CollectorCreated => "collector_created",
            WorkflowStage::InvitationsSent => "invitations_sent",
            WorkflowStage::Aborted => "aborted",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkflowStage::Loading => "Loading inputs",
            WorkflowStage::Validated => "Inputs validated",
            WorkflowStage::SurveyCreated => "Survey created",
            WorkflowStage::CollectorCreated => "Collector created",
            WorkflowStage::InvitationsSent => "Invitations sent",
            WorkflowStage::Aborted => "Aborted",
        }
    }

    /// The stage reached when the current one succeeds
    pub fn next(&self) -> Option<WorkflowStage> {
        match self {
            WorkflowStage::Loading => Some(WorkflowStage::Validated),
            WorkflowStage::Validated => Some(WorkflowStage::SurveyCreated),
            WorkflowStage::SurveyCreated => Some(WorkflowStage::CollectorCreated),
            WorkflowStage::CollectorCreated => Some(WorkflowStage::InvitationsSent),
            WorkflowStage::InvitationsSent | WorkflowStage::Aborted => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStage::InvitationsSent | WorkflowStage::Aborted)
    }

    /// Validate a transition and return the new stage.
    ///
    /// Only the next stage in the pipeline, or `Aborted` from a non-terminal
    /// stage, is allowed.
    pub fn transition(self, to: WorkflowStage) -> Result<WorkflowStage, DomainError> {
        let allowed = match to {
            WorkflowStage::Aborted => !self.is_terminal(),
            _ => self.next() == Some(to),
        };

        if allowed {
            Ok(to)
        } else {
            Err(DomainError::InvalidTransition {
                from: self.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
