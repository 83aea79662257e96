//! Credentials for the SurveyMonkey REST API
//!
//! Built once at startup and handed to [`SurveyMonkeyClient`](super::SurveyMonkeyClient)
//! by value. Nothing in this crate reads credentials from global state.

use thiserror::Error;

/// Errors that can occur while building credentials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("No access token configured: set the {env} environment variable or api.access_token")]
    MissingToken { env: String },

    #[error("Access token is empty")]
    EmptyToken,

    #[error("Invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

/// Bearer token and API base URL
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    base_url: String,
}

impl Credentials {
    pub fn new(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(CredentialsError::EmptyToken);
        }

        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(CredentialsError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            access_token,
            base_url,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `surveys/123/collectors`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
