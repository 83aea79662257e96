//! Local file system input source
//!
//! [`LocalInputSource`] reads the survey definition (a JSON document) and
//! the recipient list (one address per line) from disk.

use std::fs;
use std::io;
use std::path::Path;
use survey_application::{InputError, InputSourcePort};
use survey_domain::{RecipientList, SurveyDefinition};
use tracing::debug;

/// Input source that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalInputSource;

impl LocalInputSource {
    pub fn new() -> Self {
        Self
    }

    fn read_text(path: &Path) -> Result<String, InputError> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            // Present but not UTF-8
            io::ErrorKind::InvalidData => InputError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
            _ => InputError::NotFound {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })
    }
}

impl InputSourcePort for LocalInputSource {
    fn read_definition(&self, path: &Path) -> Result<SurveyDefinition, InputError> {
        let text = Self::read_text(path)?;
        debug!("Read {} bytes of survey definition from {}", text.len(), path.display());

        SurveyDefinition::from_json_str(&text).map_err(|e| InputError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn read_recipients(&self, path: &Path) -> Result<RecipientList, InputError> {
        let text = Self::read_text(path)?;
        let recipients = RecipientList::from_lines(&text);
        debug!("Read {} recipients from {}", recipients.len(), path.display());
        Ok(recipients)
    }
}
