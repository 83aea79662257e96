//! Input source port
//!
//! Defines how the application reads the survey definition document and the
//! recipient list. Implementations live in the infrastructure layer.

use std::path::{Path, PathBuf};
use survey_domain::{RecipientList, SurveyDefinition};
use thiserror::Error;

/// Errors that can occur while reading inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("File not found at '{}': {reason}", path.display())]
    NotFound { path: PathBuf, reason: String },

    #[error("Invalid format in '{}': {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl InputError {
    pub fn path(&self) -> &Path {
        match self {
            InputError::NotFound { path, .. } | InputError::Malformed { path, .. } => path,
        }
    }
}

/// Source of the workflow inputs
pub trait InputSourcePort: Send + Sync {
    /// Read and parse the survey definition document
    fn read_definition(&self, path: &Path) -> Result<SurveyDefinition, InputError>;

    /// Read the line-delimited recipient list
    fn read_recipients(&self, path: &Path) -> Result<RecipientList, InputError>;
}
