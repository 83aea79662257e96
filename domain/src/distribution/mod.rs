//! Distribution domain module
//!
//! Recipients, remote identifiers, collectors and invitation batches.

pub mod entities;
pub mod value_objects;

pub use entities::{
    CollectorKind, CollectorRequest, DEFAULT_COLLECTOR_NAME, InvitationBatch, RecipientList,
};
pub use value_objects::{CollectorId, EmailAddress, InvitationId, SurveyId};
