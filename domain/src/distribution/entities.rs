//! Distribution entities - recipients, collectors and invitation batches

use super::value_objects::{EmailAddress, InvitationId};
use serde::{Deserialize, Serialize};

/// Collector name used when none is configured
pub const DEFAULT_COLLECTOR_NAME: &str = "Email Collector";

/// Ordered list of invitation recipients.
///
/// Keeps input order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientList {
    recipients: Vec<EmailAddress>,
}

impl RecipientList {
    pub fn new(recipients: Vec<EmailAddress>) -> Self {
        Self { recipients }
    }

    /// Parse a line-delimited list, trimming lines and dropping blank ones.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_lines(text: &str) -> Self {
        Self {
            recipients: text
                .split(['\n', '\r'])
                .filter_map(EmailAddress::try_new)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmailAddress> {
        self.recipients.iter()
    }

    pub fn as_slice(&self) -> &[EmailAddress] {
        &self.recipients
    }
}

impl FromIterator<EmailAddress> for RecipientList {
    fn from_iter<I: IntoIterator<Item = EmailAddress>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Distribution channel of a collector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectorKind {
    #[default]
    Email,
}

impl CollectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectorKind::Email => "email",
        }
    }
}

/// Request to provision a collector under a survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorRequest {
    pub name: String,
    pub kind: CollectorKind,
}

impl CollectorRequest {
    pub fn email(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CollectorKind::Email,
        }
    }
}

impl Default for CollectorRequest {
    fn default() -> Self {
        Self::email(DEFAULT_COLLECTOR_NAME)
    }
}

/// Invitation records created by one dispatch call, in response order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationBatch {
    pub invitation_ids: Vec<InvitationId>,
}

impl InvitationBatch {
    pub fn new(invitation_ids: Vec<InvitationId>) -> Self {
        Self { invitation_ids }
    }

    pub fn len(&self) -> usize {
        self.invitation_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invitation_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_keeps_order_and_duplicates() {
        let list = RecipientList::from_lines("b@x.io\n\n  a@x.io  \n\t\nb@x.io\n");
        let emails: Vec<&str> = list.iter().map(|e| e.as_str()).collect();
        assert_eq!(emails, vec!["b@x.io", "a@x.io", "b@x.io"]);
    }

    #[test]
    fn test_from_lines_empty_input() {
        assert!(RecipientList::from_lines("").is_empty());
        assert!(RecipientList::from_lines("\n  \n").is_empty());
    }

    #[test]
    fn test_from_lines_handles_crlf() {
        let list = RecipientList::from_lines("a@x.io\r\nb@x.io\r\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].as_str(), "b@x.io");
    }

    #[test]
    fn test_from_lines_handles_cr_only() {
        let list = RecipientList::from_lines("a@x.io\rb@x.io\r");
        let emails: Vec<_> = list.iter().map(|e| e.as_str()).collect();
        assert_eq!(emails, vec!["a@x.io", "b@x.io"]);
    }

    #[test]
    fn test_default_collector_request() {
        let req = CollectorRequest::default();
        assert_eq!(req.name, "Email Collector");
        assert_eq!(req.kind.as_str(), "email");
    }
}
