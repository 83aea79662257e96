//! Progress notification port
//!
//! Defines the interface for reporting workflow progress to the operator.

use survey_domain::{CollectorId, InvitationBatch, SkippedQuestion, SurveyId, WorkflowStage};

/// Callback for progress updates during the survey workflow
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait WorkflowProgressNotifier: Send + Sync {
    /// Called once both input files are read and validated
    fn on_inputs_loaded(&self, question_count: usize, recipient_count: usize);

    /// Called when the survey exists remotely
    fn on_survey_created(&self, title: &str, survey_id: &SurveyId);

    /// Called when the collector exists remotely
    fn on_collector_created(&self, collector_id: &CollectorId);

    /// Called when the invitation batch was accepted
    fn on_invitations_sent(&self, batch: &InvitationBatch);

    /// Called before the network request that leads to `stage`
    fn on_request_start(&self, _stage: WorkflowStage) {}

    /// Called for each question left out under the lenient policy
    fn on_question_skipped(&self, _skipped: &SkippedQuestion) {}

    /// Called when the workflow stops on a failure
    fn on_aborted(&self, _stage: WorkflowStage, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgressNotifier for NoProgress {
    fn on_inputs_loaded(&self, _question_count: usize, _recipient_count: usize) {}
    fn on_survey_created(&self, _title: &str, _survey_id: &SurveyId) {}
    fn on_collector_created(&self, _collector_id: &CollectorId) {}
    fn on_invitations_sent(&self, _batch: &InvitationBatch) {}
}
