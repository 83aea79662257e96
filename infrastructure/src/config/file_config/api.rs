//! API configuration from TOML (`[api]` section)

use crate::surveymonkey::{Credentials, CredentialsError};
use serde::{Deserialize, Serialize};

/// Production endpoint of the SurveyMonkey v3 API
pub const DEFAULT_BASE_URL: &str = "https://api.surveymonkey.com/v3";

/// Environment variable consulted when no token is set in config
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "SURVEYMONKEY_ACCESS_TOKEN";

/// Raw API configuration from TOML
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "https://api.surveymonkey.com/v3"
/// access_token_env = "SURVEYMONKEY_ACCESS_TOKEN"
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Inline token; takes precedence over `access_token_env`
    pub access_token: Option<String>,
    /// Name of the environment variable holding the token
    pub access_token_env: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            access_token_env: DEFAULT_ACCESS_TOKEN_ENV.to_string(),
        }
    }
}

impl FileApiConfig {
    /// Resolve credentials from this section and the process environment.
    pub fn credentials(&self) -> Result<Credentials, CredentialsError> {
        self.credentials_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials using `lookup` in place of the environment.
    pub fn credentials_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Credentials, CredentialsError> {
        let token = self
            .access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| lookup(&self.access_token_env))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CredentialsError::MissingToken {
                env: self.access_token_env.clone(),
            })?;

        Credentials::new(token, self.base_url.clone())
    }
}

impl std::fmt::Debug for FileApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("access_token_env", &self.access_token_env)
            .finish()
    }
}
