//! Filter policy for incomplete questions

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the survey builder treats questions without answer choices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    /// Skip the question with a warning and drop pages left empty (default)
    #[default]
    Lenient,
    /// Reject the whole definition
    Strict,
}

impl FilterPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterPolicy::Lenient => "lenient",
            FilterPolicy::Strict => "strict",
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, FilterPolicy::Strict)
    }
}

impl std::fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(FilterPolicy::Lenient),
            "strict" => Ok(FilterPolicy::Strict),
            other => Err(format!(
                "unknown filter policy '{}' (expected 'lenient' or 'strict')",
                other
            )),
        }
    }
}
