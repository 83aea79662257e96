//! Application layer for survey-invite
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MIN_QUESTIONS, DEFAULT_MIN_RECIPIENTS, WorkflowParams};
pub use ports::{
    input_source::{InputError, InputSourcePort},
    progress::{NoProgress, WorkflowProgressNotifier},
    survey_service::{ServiceError, SurveyServicePort},
};
pub use use_cases::create_collector::{CreateCollectorError, CreateCollectorUseCase};
pub use use_cases::create_survey::{CreateSurveyError, CreateSurveyUseCase, CreatedSurvey};
pub use use_cases::load_inputs::{
    LoadInputsError, LoadInputsInput, LoadInputsUseCase, LoadedInputs,
};
pub use use_cases::run_workflow::{
    RunWorkflowInput, RunWorkflowUseCase, WorkflowAbort, WorkflowError, WorkflowReport,
};
pub use use_cases::send_invitations::{SendInvitationsError, SendInvitationsUseCase};
