//! Domain layer for survey-invite
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Survey Definition
//!
//! A nested mapping of page → question → answer choices, read from a JSON
//! document under the `Survey_Name` marker key.
//!
//! ## Blueprint
//!
//! The filtered form of a definition that is actually sent to the survey
//! service. A [`FilterPolicy`] decides whether incomplete questions are
//! skipped (lenient) or rejected (strict).
//!
//! ## Distribution
//!
//! Recipients, the email collector that owns the invitations, and the
//! server-assigned IDs of every remote resource.

pub mod config;
pub mod core;
pub mod distribution;
pub mod survey;
pub mod workflow;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use distribution::{
    CollectorId, CollectorKind, CollectorRequest, DEFAULT_COLLECTOR_NAME, EmailAddress,
    InvitationBatch, InvitationId, RecipientList, SurveyId,
};
pub use survey::{
    BuildOutcome, DEFAULT_SURVEY_TITLE, DEFINITION_MARKER, FilterPolicy, PageBlueprint, PageMap,
    QuestionBlueprint, QuestionDescriptor, QuestionMap, SkippedQuestion, SurveyBlueprint,
    SurveyDefinition,
};
pub use workflow::WorkflowStage;
