//! Survey domain module
//!
//! Contains the survey definition read from the input document, the
//! filter policy, and the blueprint built from them.

pub mod blueprint;
pub mod definition;
pub mod policy;

pub use blueprint::{
    BuildOutcome, DEFAULT_SURVEY_TITLE, PageBlueprint, QuestionBlueprint, SkippedQuestion,
    SurveyBlueprint,
};
pub use definition::{DEFINITION_MARKER, PageMap, QuestionDescriptor, QuestionMap, SurveyDefinition};
pub use policy::FilterPolicy;
