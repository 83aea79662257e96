//! Survey blueprint - the filtered, service-neutral form of a definition.
//!
//! Building a blueprint applies the [`FilterPolicy`]:
//!
//! | Situation | Lenient | Strict |
//! |-----------|---------|--------|
//! | Question without answers | skipped, recorded in [`BuildOutcome::skipped`] | [`DomainError::QuestionWithoutAnswers`] |
//! | Page without questions | dropped | [`DomainError::EmptyPage`] |
//! | Nothing left to emit | [`DomainError::NoValidQuestions`] | [`DomainError::NoValidQuestions`] |
//!
//! Every emitted question is a single-choice question; the rendering to the
//! remote wire format lives in the infrastructure adapter.

use super::definition::{DEFINITION_MARKER, SurveyDefinition};
use super::policy::FilterPolicy;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Survey title used when none is configured
pub const DEFAULT_SURVEY_TITLE: &str = "My Automated Survey";

/// A single-choice question ready to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBlueprint {
    /// Question name from the definition
    pub name: String,
    /// Visible prompt text
    pub heading: String,
    /// Answer choices in order
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBlueprint {
    pub title: String,
    pub questions: Vec<QuestionBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyBlueprint {
    pub title: String,
    pub pages: Vec<PageBlueprint>,
}

/// A question left out of the blueprint because it had no answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedQuestion {
    pub page: String,
    pub question: String,
}

/// Result of [`SurveyBlueprint::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub blueprint: SurveyBlueprint,
    pub skipped: Vec<SkippedQuestion>,
}

impl SurveyBlueprint {
    /// Build a blueprint from a definition under the given policy.
    pub fn build(
        title: impl Into<String>,
        definition: &SurveyDefinition,
        policy: FilterPolicy,
    ) -> Result<BuildOutcome, DomainError> {
        if !definition.has_marker() {
            return Err(DomainError::MissingMarker(DEFINITION_MARKER));
        }

        let mut pages = Vec::new();
        let mut skipped = Vec::new();

        for (page_title, questions) in definition.pages() {
            if questions.is_empty() && policy.is_strict() {
                return Err(DomainError::EmptyPage(page_title.to_string()));
            }

            let mut emitted = Vec::with_capacity(questions.len());
            for (name, descriptor) in questions {
                if !descriptor.has_answers() {
                    if policy.is_strict() {
                        return Err(DomainError::QuestionWithoutAnswers {
                            page: page_title.to_string(),
                            question: name.clone(),
                        });
                    }
                    skipped.push(SkippedQuestion {
                        page: page_title.to_string(),
                        question: name.clone(),
                    });
                    continue;
                }

                emitted.push(QuestionBlueprint {
                    name: name.clone(),
                    heading: descriptor.heading(name).to_string(),
                    choices: descriptor.answers.clone(),
                });
            }

            if !emitted.is_empty() {
                pages.push(PageBlueprint {
                    title: page_title.to_string(),
                    questions: emitted,
                });
            }
        }

        if pages.is_empty() {
            return Err(DomainError::NoValidQuestions);
        }

        Ok(BuildOutcome {
            blueprint: SurveyBlueprint {
                title: title.into(),
                pages,
            },
            skipped,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of emitted questions across all pages
    pub fn question_count(&self) -> usize {
        self.pages.iter().map(|p| p.questions.len()).sum()
    }
}
