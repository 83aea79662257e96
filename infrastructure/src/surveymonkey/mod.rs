//! SurveyMonkey adapter
//!
//! Implements [`SurveyServicePort`](survey_application::SurveyServicePort)
//! over the v3 REST API.

mod client;
mod credentials;
mod wire;

pub use client::SurveyMonkeyClient;
pub use credentials::{Credentials, CredentialsError};
