//! Configuration file loading for survey-invite
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SURVEY_INVITE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./survey-invite.toml` or `./.survey-invite.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/survey-invite/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileOutputConfig,
    FileSurveyConfig, FileValidationConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
