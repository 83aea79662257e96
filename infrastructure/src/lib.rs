//! Infrastructure layer for survey-invite
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod input;
pub mod surveymonkey;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig};
pub use input::LocalInputSource;
pub use surveymonkey::{Credentials, CredentialsError, SurveyMonkeyClient};
