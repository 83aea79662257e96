//! Run Workflow use case.
//!
//! Chains the four stages as a sequence of fallible steps:
//!
//! ```text
//! LoadInputs -> CreateSurvey -> CreateCollector -> SendInvitations
//! ```
//!
//! The first failure ends the run. Remote resources created before the
//! failure are not rolled back; their IDs are returned in [`WorkflowAbort`]
//! so the operator can clean them up.

use super::create_collector::{CreateCollectorError, CreateCollectorUseCase};
use super::create_survey::{CreateSurveyError, CreateSurveyUseCase};
use super::load_inputs::{LoadInputsError, LoadInputsInput, LoadInputsUseCase};
use super::send_invitations::{SendInvitationsError, SendInvitationsUseCase};
use crate::config::WorkflowParams;
use crate::ports::input_source::InputSourcePort;
use crate::ports::progress::WorkflowProgressNotifier;
use crate::ports::survey_service::SurveyServicePort;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use survey_domain::{CollectorId, InvitationId, SkippedQuestion, SurveyId, WorkflowStage};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Stage-tagged workflow error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error(transparent)]
    Load(#[from] LoadInputsError),

    #[error(transparent)]
    Survey(#[from] CreateSurveyError),

    #[error(transparent)]
    Collector(#[from] CreateCollectorError),

    #[error(transparent)]
    Invitations(#[from] SendInvitationsError),
}

impl WorkflowError {
    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::Load(LoadInputsError::NotFound { .. }) => "not_found",
            WorkflowError::Load(LoadInputsError::MalformedInput { .. }) => "malformed_input",
            WorkflowError::Load(LoadInputsError::InsufficientRecipients { .. }) => {
                "insufficient_recipients"
            }
            WorkflowError::Load(LoadInputsError::InsufficientQuestions { .. }) => {
                "insufficient_questions"
            }
            WorkflowError::Survey(CreateSurveyError::InvalidDefinition(_)) => "invalid_definition",
            WorkflowError::Survey(CreateSurveyError::SurveyCreation(_)) => "survey_creation",
            WorkflowError::Collector(CreateCollectorError::CollectorCreation(_)) => {
                "collector_creation"
            }
            WorkflowError::Invitations(SendInvitationsError::DispatchPrecondition(_)) => {
                "dispatch_precondition"
            }
            WorkflowError::Invitations(SendInvitationsError::InvitationDispatch(_)) => {
                "invitation_dispatch"
            }
        }
    }

    /// Whether the failure happened before any network call
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WorkflowError::Load(_)
                | WorkflowError::Survey(CreateSurveyError::InvalidDefinition(_))
        )
    }
}

/// Failure summary of an aborted run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Workflow aborted after stage '{}': {error}", stage.as_str())]
pub struct WorkflowAbort {
    /// Last stage that completed successfully
    pub stage: WorkflowStage,
    #[source]
    pub error: WorkflowError,
    /// Survey created before the failure, left in place
    pub survey_id: Option<SurveyId>,
    /// Collector created before the failure, left in place
    pub collector_id: Option<CollectorId>,
}

impl WorkflowAbort {
    /// Whether the run left remote resources behind
    pub fn has_orphans(&self) -> bool {
        self.survey_id.is_some() || self.collector_id.is_some()
    }
}

/// Success summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    pub survey_title: String,
    pub survey_id: SurveyId,
    pub collector_id: CollectorId,
    pub invitation_ids: Vec<InvitationId>,
    pub recipient_count: usize,
    pub page_count: usize,
    pub question_count: usize,
    pub skipped: Vec<SkippedQuestion>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Input for the [`RunWorkflowUseCase`].
pub type RunWorkflowInput = LoadInputsInput;

/// Tracks the current stage and logs each transition.
struct StageTracker {
    stage: WorkflowStage,
}

impl StageTracker {
    fn new() -> Self {
        Self {
            stage: WorkflowStage::Loading,
        }
    }

    fn advance(&mut self, to: WorkflowStage) {
        match self.stage.transition(to) {
            Ok(next) => {
                debug!("Workflow stage: {} -> {}", self.stage.as_str(), next.as_str());
                self.stage = next;
            }
            Err(e) => warn!("{}", e),
        }
    }
}

/// Use case for running the whole survey workflow.
pub struct RunWorkflowUseCase {
    load_inputs: LoadInputsUseCase,
    create_survey: CreateSurveyUseCase,
    create_collector: CreateCollectorUseCase,
    send_invitations: SendInvitationsUseCase,
}

impl RunWorkflowUseCase {
    pub fn new(
        input_source: Arc<dyn InputSourcePort>,
        service: Arc<dyn SurveyServicePort>,
        params: WorkflowParams,
    ) -> Self {
        Self {
            load_inputs: LoadInputsUseCase::new(input_source)
                .with_minimums(params.min_recipients, params.min_questions),
            create_survey: CreateSurveyUseCase::new(service.clone())
                .with_title(params.survey_title)
                .with_policy(params.policy),
            create_collector: CreateCollectorUseCase::new(service.clone())
                .with_name(params.collector_name),
            send_invitations: SendInvitationsUseCase::new(service),
        }
    }

    pub async fn execute(
        &self,
        input: RunWorkflowInput,
        progress: &dyn WorkflowProgressNotifier,
    ) -> Result<WorkflowReport, WorkflowAbort> {
        let started_at = Utc::now();
        let mut tracker = StageTracker::new();

        // Every failure goes through here
        let abort = |tracker: &StageTracker,
                     error: WorkflowError,
                     survey_id: Option<SurveyId>,
                     collector_id: Option<CollectorId>| {
            info!("Workflow aborted at {}: {}", tracker.stage.as_str(), error);
            progress.on_aborted(tracker.stage, &error.to_string());
            // A blank ID names no remote resource
            WorkflowAbort {
                stage: tracker.stage,
                error,
                survey_id: survey_id.filter(|id| !id.is_empty()),
                collector_id: collector_id.filter(|id| !id.is_empty()),
            }
        };

        // Stage 1: inputs
        let loaded = match self.load_inputs.execute(&input) {
            Ok(loaded) => loaded,
            Err(e) => return Err(abort(&tracker, e.into(), None, None)),
        };
        tracker.advance(WorkflowStage::Validated);
        progress.on_inputs_loaded(loaded.question_count, loaded.recipients.len());

        // Stage 2: survey
        let created = match self
            .create_survey
            .execute(&loaded.definition, progress)
            .await
        {
            Ok(created) => created,
            Err(e) => return Err(abort(&tracker, e.into(), None, None)),
        };
        let survey_id = created.id.clone();
        tracker.advance(WorkflowStage::SurveyCreated);

        // Stage 3: collector
        let collector_id = match self.create_collector.execute(&survey_id, progress).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                let e = SendInvitationsError::DispatchPrecondition(
                    "collector ID is missing".to_string(),
                );
                return Err(abort(&tracker, e.into(), Some(survey_id), None));
            }
            Err(e) => return Err(abort(&tracker, e.into(), Some(survey_id), None)),
        };
        tracker.advance(WorkflowStage::CollectorCreated);

        // Stage 4: invitations
        let batch = match self
            .send_invitations
            .execute(Some(&collector_id), &loaded.recipients, progress)
            .await
        {
            Ok(batch) => batch,
            Err(e) => {
                return Err(abort(
                    &tracker,
                    e.into(),
                    Some(survey_id),
                    Some(collector_id),
                ));
            }
        };
        tracker.advance(WorkflowStage::InvitationsSent);

        info!(
            "Workflow complete: survey {}, {} invitations",
            survey_id,
            batch.len()
        );

        Ok(WorkflowReport {
            survey_title: created.title,
            survey_id,
            collector_id,
            invitation_ids: batch.invitation_ids,
            recipient_count: loaded.recipients.len(),
            page_count: created.page_count,
            question_count: created.question_count,
            skipped: created.skipped,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::input_source::InputError;
    use crate::ports::progress::NoProgress;
    use crate::ports::survey_service::ServiceError;
    use crate::use_cases::test_support::{
        MockInputSource, MockSurveyService, RecordingProgress, ServiceCall, definition,
        recipients, scenario_definition,
    };
    use std::path::PathBuf;
    use survey_domain::FilterPolicy;

    fn input() -> RunWorkflowInput {
        RunWorkflowInput::new("survey.json", "emails.txt")
    }

    fn workflow(source: MockInputSource, service: Arc<MockSurveyService>) -> RunWorkflowUseCase {
        RunWorkflowUseCase::new(Arc::new(source), service, WorkflowParams::default())
    }

    fn two_recipients() -> survey_domain::RecipientList {
        recipients(&["a@x.io", "b@x.io"])
    }

    #[tokio::test]
    async fn test_scenario_runs_all_stages() {
        let service = Arc::new(MockSurveyService::new());
        let progress = RecordingProgress::default();
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let report = workflow(source, service.clone())
            .execute(input(), &progress)
            .await
            .unwrap();

        assert_eq!(report.survey_id, SurveyId::new("survey-1"));
        assert_eq!(report.collector_id, CollectorId::new("collector-for-survey-1"));
        assert_eq!(report.invitation_ids.len(), 2);
        assert_eq!(report.question_count, 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(report.finished_at >= report.started_at);

        let calls = service.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], ServiceCall::CreateSurvey(_)));
        assert!(matches!(calls[1], ServiceCall::CreateCollector(..)));
        assert!(matches!(calls[2], ServiceCall::SendInvitations(..)));

        assert_eq!(
            progress.events(),
            vec![
                "loaded:3:2",
                "skipped:Page1/Q3",
                "request:survey_created",
                "survey:My Automated Survey:survey-1",
                "request:collector_created",
                "collector:collector-for-survey-1",
                "request:invitations_sent",
                "invitations:2",
            ]
        );
    }

    #[tokio::test]
    async fn test_single_recipient_fails_before_network() {
        let service = Arc::new(MockSurveyService::new());
        let source = MockInputSource::new(scenario_definition(), recipients(&["a@x.io"]));

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.stage, WorkflowStage::Loading);
        assert_eq!(abort.error.kind(), "insufficient_recipients");
        assert!(abort.error.is_input_error());
        assert!(!abort.has_orphans());
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_too_few_questions_fails_before_network() {
        let service = Arc::new(MockSurveyService::new());
        let def = definition(&[("P", &[("Q1", &["a"]), ("Q2", &["b"])])]);
        let source = MockInputSource::new(def, two_recipients());

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.error.kind(), "insufficient_questions");
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_aborts() {
        let service = Arc::new(MockSurveyService::new());
        let source = MockInputSource::new(scenario_definition(), two_recipients())
            .with_definition_error(InputError::NotFound {
                path: PathBuf::from("survey.json"),
                reason: "No such file or directory".to_string(),
            });

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.error.kind(), "not_found");
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_survey_failure_skips_later_stages() {
        let service = Arc::new(MockSurveyService::new().failing_survey(ServiceError::Status {
            status: 500,
            body: "internal".to_string(),
        }));
        let progress = RecordingProgress::default();
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let abort = workflow(source, service.clone())
            .execute(input(), &progress)
            .await
            .unwrap_err();

        assert_eq!(abort.stage, WorkflowStage::Validated);
        assert_eq!(abort.error.kind(), "survey_creation");
        assert!(!abort.error.is_input_error());
        assert!(!abort.has_orphans());
        assert_eq!(service.call_count(), 1);
        assert_eq!(
            progress.events().last().map(String::as_str),
            Some("aborted:validated")
        );
    }

    #[tokio::test]
    async fn test_collector_failure_reports_orphaned_survey() {
        let service = Arc::new(
            MockSurveyService::new()
                .failing_collector(ServiceError::Transport("timed out".to_string())),
        );
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.stage, WorkflowStage::SurveyCreated);
        assert_eq!(abort.error.kind(), "collector_creation");
        assert_eq!(abort.survey_id, Some(SurveyId::new("survey-1")));
        assert_eq!(abort.collector_id, None);
        assert!(abort.has_orphans());
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invitation_failure_reports_both_orphans() {
        let service = Arc::new(
            MockSurveyService::new()
                .with_collector_id("C-9")
                .failing_invitations(ServiceError::InvalidResponse("not json".to_string())),
        );
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let abort = workflow(source, service)
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.stage, WorkflowStage::CollectorCreated);
        assert_eq!(abort.error.kind(), "invitation_dispatch");
        assert_eq!(abort.collector_id, Some(CollectorId::new("C-9")));
    }

    #[tokio::test]
    async fn test_empty_collector_id_becomes_precondition_error() {
        let service = Arc::new(MockSurveyService::new().with_collector_id(""));
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.error.kind(), "dispatch_precondition");
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_collector_id_is_not_reported_as_orphan() {
        let service = Arc::new(MockSurveyService::new().with_collector_id("  "));
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        let abort = workflow(source, service.clone())
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.error.kind(), "dispatch_precondition");
        assert_eq!(abort.survey_id, Some(SurveyId::new("survey-1")));
        assert_eq!(abort.collector_id, None);
    }

    #[tokio::test]
    async fn test_strict_policy_aborts_without_network() {
        let service = Arc::new(MockSurveyService::new());
        let source = MockInputSource::new(scenario_definition(), two_recipients());
        let params = WorkflowParams::default().with_policy(FilterPolicy::Strict);

        let abort = RunWorkflowUseCase::new(Arc::new(source), service.clone(), params)
            .execute(input(), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(abort.error.kind(), "invalid_definition");
        assert!(abort.error.is_input_error());
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_runs_create_distinct_surveys() {
        let service = Arc::new(MockSurveyService::new());
        let use_case = RunWorkflowUseCase::new(
            Arc::new(MockInputSource::new(scenario_definition(), two_recipients())),
            service.clone(),
            WorkflowParams::default(),
        );

        let first = use_case.execute(input(), &NoProgress).await.unwrap();
        let second = use_case.execute(input(), &NoProgress).await.unwrap();

        assert_ne!(first.survey_id, second.survey_id);
        assert_eq!(service.call_count(), 6);
    }

    #[tokio::test]
    async fn test_params_flow_into_requests() {
        let service = Arc::new(MockSurveyService::new());
        let params = WorkflowParams::default()
            .with_survey_title("Pulse")
            .with_collector_name("Pulse Mailer");
        let source = MockInputSource::new(scenario_definition(), two_recipients());

        RunWorkflowUseCase::new(Arc::new(source), service.clone(), params)
            .execute(input(), &NoProgress)
            .await
            .unwrap();

        let calls = service.calls();
        let ServiceCall::CreateSurvey(blueprint) = &calls[0] else {
            panic!("expected a create_survey call");
        };
        assert_eq!(blueprint.title, "Pulse");
        let ServiceCall::CreateCollector(_, request) = &calls[1] else {
            panic!("expected a create_collector call");
        };
        assert_eq!(request.name, "Pulse Mailer");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = WorkflowReport {
            survey_title: "T".to_string(),
            survey_id: SurveyId::new("1"),
            collector_id: CollectorId::new("2"),
            invitation_ids: vec![InvitationId::new("3")],
            recipient_count: 2,
            page_count: 1,
            question_count: 3,
            skipped: vec![],
            started_at: Utc::now(),
            finished_at: Utc::now(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["survey_id"], "1");
        assert_eq!(json["invitation_ids"][0], "3");
    }
}
