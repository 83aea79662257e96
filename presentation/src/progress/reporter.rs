//! Progress reporting for the survey workflow

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use survey_application::WorkflowProgressNotifier;
use survey_domain::{CollectorId, InvitationBatch, SkippedQuestion, SurveyId, WorkflowStage};

/// Text shown while the request leading to `stage` is in flight
fn request_message(stage: WorkflowStage) -> &'static str {
    match stage {
        WorkflowStage::SurveyCreated => "Creating survey...",
        WorkflowStage::CollectorCreated => "Creating email collector...",
        WorkflowStage::InvitationsSent => "Sending invitations...",
        _ => "Working...",
    }
}

fn invitation_ids(batch: &InvitationBatch) -> String {
    let ids: Vec<&str> = batch.invitation_ids.iter().map(|id| id.as_str()).collect();
    format!("[{}]", ids.join(", "))
}

/// Reports progress with a spinner per network request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, message: &'static str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Print a line without tearing an active spinner
    fn line(&self, text: String) {
        match self.spinner.lock().ok().as_deref().and_then(Option::as_ref) {
            Some(pb) => pb.println(text),
            None => println!("{}", text),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgressNotifier for ProgressReporter {
    fn on_inputs_loaded(&self, question_count: usize, recipient_count: usize) {
        self.line(format!(
            "{} Survey data loaded successfully ({} questions, {} recipients)",
            "v".green(),
            question_count,
            recipient_count
        ));
    }

    fn on_survey_created(&self, title: &str, survey_id: &SurveyId) {
        self.clear_spinner();
        self.line(format!(
            "{} Survey '{}' created successfully. Survey ID: {}",
            "v".green(),
            title.bold(),
            survey_id
        ));
    }

    fn on_collector_created(&self, collector_id: &CollectorId) {
        self.clear_spinner();
        self.line(format!(
            "{} Collector created successfully. Collector ID: {}",
            "v".green(),
            collector_id
        ));
    }

    fn on_invitations_sent(&self, batch: &InvitationBatch) {
        self.clear_spinner();
        self.line(format!(
            "{} Invitations sent successfully. Invitation IDs: {}",
            "v".green(),
            invitation_ids(batch)
        ));
    }

    fn on_request_start(&self, stage: WorkflowStage) {
        self.start_spinner(request_message(stage));
    }

    fn on_question_skipped(&self, skipped: &SkippedQuestion) {
        self.line(format!(
            "{} Question '{}' on page '{}' has no answers. Skipping.",
            "!".yellow(),
            skipped.question,
            skipped.page
        ));
    }

    fn on_aborted(&self, _stage: WorkflowStage, _reason: &str) {
        self.clear_spinner();
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl WorkflowProgressNotifier for SimpleProgress {
    fn on_inputs_loaded(&self, question_count: usize, recipient_count: usize) {
        println!(
            "Survey data loaded successfully ({} questions, {} recipients)",
            question_count, recipient_count
        );
    }

    fn on_survey_created(&self, title: &str, survey_id: &SurveyId) {
        println!(
            "Survey '{}' created successfully. Survey ID: {}",
            title, survey_id
        );
    }

    fn on_collector_created(&self, collector_id: &CollectorId) {
        println!(
            "Collector created successfully. Collector ID: {}",
            collector_id
        );
    }

    fn on_invitations_sent(&self, batch: &InvitationBatch) {
        println!(
            "Invitations sent successfully. Invitation IDs: {}",
            invitation_ids(batch)
        );
    }

    fn on_request_start(&self, stage: WorkflowStage) {
        println!("{} {}", "->".cyan(), request_message(stage));
    }

    fn on_question_skipped(&self, skipped: &SkippedQuestion) {
        println!(
            "Warning: Question '{}' on page '{}' has no answers. Skipping.",
            skipped.question, skipped.page
        );
    }
}
