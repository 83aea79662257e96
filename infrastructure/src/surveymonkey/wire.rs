//! JSON bodies exchanged with the SurveyMonkey REST API
//!
//! Request bodies borrow from the domain values they render; response
//! bodies keep only the fields the workflow reads.

use serde::{Deserialize, Serialize};
use survey_domain::{CollectorRequest, QuestionBlueprint, RecipientList, SurveyBlueprint};

// ==================== Requests ====================

/// `POST /surveys`
#[derive(Debug, Serialize)]
pub struct CreateSurveyBody<'a> {
    pub title: &'a str,
    pub pages: Vec<PageBody<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PageBody<'a> {
    pub title: &'a str,
    pub questions: Vec<QuestionEnvelope<'a>>,
}

#[derive(Debug, Serialize)]
pub struct QuestionEnvelope<'a> {
    pub question: QuestionBody<'a>,
}

/// A single-select question laid out vertically
#[derive(Debug, Serialize)]
pub struct QuestionBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub family: &'static str,
    pub subtype: &'static str,
    pub answers: AnswersBody<'a>,
    pub heading: &'a str,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct AnswersBody<'a> {
    pub choices: Vec<ChoiceBody<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChoiceBody<'a> {
    pub text: &'a str,
}

impl<'a> From<&'a QuestionBlueprint> for QuestionEnvelope<'a> {
    fn from(question: &'a QuestionBlueprint) -> Self {
        Self {
            question: QuestionBody {
                kind: "single",
                family: "single_choice",
                subtype: "vertical",
                answers: AnswersBody {
                    choices: question
                        .choices
                        .iter()
                        .map(|text| ChoiceBody { text })
                        .collect(),
                },
                heading: &question.heading,
                required: false,
            },
        }
    }
}

impl<'a> From<&'a SurveyBlueprint> for CreateSurveyBody<'a> {
    fn from(blueprint: &'a SurveyBlueprint) -> Self {
        Self {
            title: &blueprint.title,
            pages: blueprint
                .pages
                .iter()
                .map(|page| PageBody {
                    title: &page.title,
                    questions: page.questions.iter().map(QuestionEnvelope::from).collect(),
                })
                .collect(),
        }
    }
}

/// `POST /surveys/{id}/collectors`
#[derive(Debug, Serialize)]
pub struct CreateCollectorBody<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl<'a> From<&'a CollectorRequest> for CreateCollectorBody<'a> {
    fn from(request: &'a CollectorRequest) -> Self {
        Self {
            name: &request.name,
            kind: request.kind.as_str(),
        }
    }
}

/// `POST /collectors/{id}/messages`
#[derive(Debug, Serialize)]
pub struct SendMessagesBody<'a> {
    pub recipients: Vec<RecipientBody<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RecipientBody<'a> {
    pub email: &'a str,
}

impl<'a> From<&'a RecipientList> for SendMessagesBody<'a> {
    fn from(list: &'a RecipientList) -> Self {
        Self {
            recipients: list
                .iter()
                .map(|email| RecipientBody {
                    email: email.as_str(),
                })
                .collect(),
        }
    }
}

// ==================== Responses ====================

/// An ID the service may send as a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Text(String),
    Number(u64),
}

impl RemoteId {
    pub fn into_string(self) -> String {
        match self {
            RemoteId::Text(s) => s,
            RemoteId::Number(n) => n.to_string(),
        }
    }
}

/// Any response object whose `id` field is all we need
#[derive(Debug, Deserialize)]
pub struct IdResponse {
    #[serde(default)]
    pub id: Option<RemoteId>,
}

impl IdResponse {
    /// The ID, if present and non-blank
    pub fn into_id(self) -> Option<String> {
        self.id
            .map(RemoteId::into_string)
            .filter(|id| !id.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub data: Vec<IdResponse>,
}
