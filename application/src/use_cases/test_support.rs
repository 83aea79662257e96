//! In-memory port implementations shared by the use case tests.

use crate::ports::input_source::{InputError, InputSourcePort};
use crate::ports::progress::WorkflowProgressNotifier;
use crate::ports::survey_service::{ServiceError, SurveyServicePort};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use survey_domain::{
    CollectorId, CollectorRequest, EmailAddress, InvitationBatch, InvitationId, PageMap,
    QuestionDescriptor, QuestionMap, RecipientList, SkippedQuestion, SurveyBlueprint,
    SurveyDefinition, SurveyId, WorkflowStage,
};

// === Fixtures ===

pub(crate) fn recipients(emails: &[&str]) -> RecipientList {
    emails.iter().filter_map(EmailAddress::try_new).collect()
}

/// One page per entry; each question is `(name, answers)`.
pub(crate) fn definition(pages: &[(&str, &[(&str, &[&str])])]) -> SurveyDefinition {
    let map: PageMap = pages
        .iter()
        .map(|(title, questions)| {
            let questions: QuestionMap = questions
                .iter()
                .map(|(name, answers)| {
                    (
                        name.to_string(),
                        QuestionDescriptor::new(answers.iter().map(|a| a.to_string()).collect()),
                    )
                })
                .collect();
            (title.to_string(), questions)
        })
        .collect();
    SurveyDefinition::new(map)
}

/// The `Page1` / `Q1..Q3` definition where `Q3` has no answers.
pub(crate) fn scenario_definition() -> SurveyDefinition {
    definition(&[(
        "Page1",
        &[("Q1", &["A", "B"]), ("Q2", &["C"]), ("Q3", &[])],
    )])
}

// === Input source ===

pub(crate) struct MockInputSource {
    definition: Result<SurveyDefinition, InputError>,
    recipients: Result<RecipientList, InputError>,
    pub reads: Mutex<Vec<PathBuf>>,
}

impl MockInputSource {
    pub(crate) fn new(definition: SurveyDefinition, recipients: RecipientList) -> Self {
        Self {
            definition: Ok(definition),
            recipients: Ok(recipients),
            reads: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_definition_error(mut self, error: InputError) -> Self {
        self.definition = Err(error);
        self
    }

    pub(crate) fn with_recipients_error(mut self, error: InputError) -> Self {
        self.recipients = Err(error);
        self
    }
}

impl InputSourcePort for MockInputSource {
    fn read_definition(&self, path: &Path) -> Result<SurveyDefinition, InputError> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.definition.clone()
    }

    fn read_recipients(&self, path: &Path) -> Result<RecipientList, InputError> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.recipients.clone()
    }
}

// === Survey service ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ServiceCall {
    CreateSurvey(SurveyBlueprint),
    CreateCollector(SurveyId, CollectorRequest),
    SendInvitations(CollectorId, Vec<String>),
}

#[derive(Default)]
pub(crate) struct MockSurveyService {
    pub calls: Mutex<Vec<ServiceCall>>,
    survey_error: Option<ServiceError>,
    collector_error: Option<ServiceError>,
    invitation_error: Option<ServiceError>,
    collector_id: Option<String>,
}

impl MockSurveyService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_survey(mut self, error: ServiceError) -> Self {
        self.survey_error = Some(error);
        self
    }

    pub(crate) fn failing_collector(mut self, error: ServiceError) -> Self {
        self.collector_error = Some(error);
        self
    }

    pub(crate) fn failing_invitations(mut self, error: ServiceError) -> Self {
        self.invitation_error = Some(error);
        self
    }

    pub(crate) fn with_collector_id(mut self, id: impl Into<String>) -> Self {
        self.collector_id = Some(id.into());
        self
    }

    pub(crate) fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SurveyServicePort for MockSurveyService {
    async fn create_survey(&self, blueprint: &SurveyBlueprint) -> Result<SurveyId, ServiceError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(ServiceCall::CreateSurvey(blueprint.clone()));
        if let Some(error) = &self.survey_error {
            return Err(error.clone());
        }
        let created = calls
            .iter()
            .filter(|c| matches!(c, ServiceCall::CreateSurvey(_)))
            .count();
        Ok(SurveyId::new(format!("survey-{}", created)))
    }

    async fn create_collector(
        &self,
        survey_id: &SurveyId,
        request: &CollectorRequest,
    ) -> Result<CollectorId, ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push(ServiceCall::CreateCollector(survey_id.clone(), request.clone()));
        if let Some(error) = &self.collector_error {
            return Err(error.clone());
        }
        let id = self
            .collector_id
            .clone()
            .unwrap_or_else(|| format!("collector-for-{}", survey_id));
        Ok(CollectorId::new(id))
    }

    async fn send_invitations(
        &self,
        collector_id: &CollectorId,
        recipients: &RecipientList,
    ) -> Result<InvitationBatch, ServiceError> {
        let emails: Vec<String> = recipients.iter().map(|e| e.to_string()).collect();
        self.calls
            .lock()
            .unwrap()
            .push(ServiceCall::SendInvitations(collector_id.clone(), emails.clone()));
        if let Some(error) = &self.invitation_error {
            return Err(error.clone());
        }
        Ok(InvitationBatch::new(
            (1..=emails.len())
                .map(|i| InvitationId::new(format!("inv-{}", i)))
                .collect(),
        ))
    }
}

// === Progress ===

#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl WorkflowProgressNotifier for RecordingProgress {
    fn on_inputs_loaded(&self, question_count: usize, recipient_count: usize) {
        self.push(format!("loaded:{}:{}", question_count, recipient_count));
    }

    fn on_survey_created(&self, title: &str, survey_id: &SurveyId) {
        self.push(format!("survey:{}:{}", title, survey_id));
    }

    fn on_collector_created(&self, collector_id: &CollectorId) {
        self.push(format!("collector:{}", collector_id));
    }

    fn on_invitations_sent(&self, batch: &InvitationBatch) {
        self.push(format!("invitations:{}", batch.len()));
    }

    fn on_request_start(&self, stage: WorkflowStage) {
        self.push(format!("request:{}", stage.as_str()));
    }

    fn on_question_skipped(&self, skipped: &SkippedQuestion) {
        self.push(format!("skipped:{}/{}", skipped.page, skipped.question));
    }

    fn on_aborted(&self, stage: WorkflowStage, _reason: &str) {
        self.push(format!("aborted:{}", stage.as_str()));
    }
}
