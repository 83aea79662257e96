//! Survey definition (Entity)
//!
//! A survey definition is the parsed form of the input document:
//!
//! ```json
//! {
//!   "Survey_Name": {
//!     "Page1": {
//!       "Q1": { "Description": "Favourite colour?", "Answers": ["Red", "Blue"] },
//!       "Q2": { "Answers": ["Yes", "No"] }
//!     }
//!   }
//! }
//! ```
//!
//! Pages and questions keep their document order.

use crate::core::error::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level key that marks a document as a survey definition
pub const DEFINITION_MARKER: &str = "Survey_Name";

/// Questions of a single page, keyed by question name
pub type QuestionMap = IndexMap<String, QuestionDescriptor>;

/// Pages of a definition, keyed by page title
pub type PageMap = IndexMap<String, QuestionMap>;

/// Description and answer choices of one question (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDescriptor {
    /// Visible prompt text; falls back to the question name when absent
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Answer choices in display order
    #[serde(
        rename = "Answers",
        alias = "answers",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub answers: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl QuestionDescriptor {
    pub fn new(answers: Vec<String>) -> Self {
        Self {
            description: None,
            answers,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// Prompt text for this question.
    ///
    /// A blank description counts as absent.
    pub fn heading<'a>(&'a self, name: &'a str) -> &'a str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => name,
        }
    }
}

/// A parsed survey definition document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDefinition {
    #[serde(rename = "Survey_Name", default, skip_serializing_if = "Option::is_none")]
    pages: Option<PageMap>,
}

impl SurveyDefinition {
    /// Create a definition carrying the marker with the given pages
    pub fn new(pages: PageMap) -> Self {
        Self { pages: Some(pages) }
    }

    /// Parse a definition from JSON text.
    ///
    /// The document must be a JSON object. A missing marker is not a parse
    /// error; it is rejected later when the survey is built.
    pub fn from_json_str(text: &str) -> Result<Self, DomainError> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| DomainError::MalformedDefinition(e.to_string()))?;

        if !value.is_object() {
            return Err(DomainError::MalformedDefinition(
                "expected a JSON object at the top level".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| DomainError::MalformedDefinition(e.to_string()))
    }

    /// Whether the definition marker key is present
    pub fn has_marker(&self) -> bool {
        self.pages.is_some()
    }

    /// Iterate pages in document order (empty when the marker is missing)
    pub fn pages(&self) -> impl Iterator<Item = (&str, &QuestionMap)> {
        self.pages
            .iter()
            .flat_map(|pages| pages.iter().map(|(title, q)| (title.as_str(), q)))
    }

    pub fn page_count(&self) -> usize {
        self.pages.as_ref().map_or(0, |p| p.len())
    }

    /// Total number of questions across all pages, including questions
    /// without answers.
    pub fn question_count(&self) -> usize {
        self.pages().map(|(_, questions)| questions.len()).sum()
    }
}
