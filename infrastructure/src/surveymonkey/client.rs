//! HTTP adapter for the SurveyMonkey v3 API
//!
//! Each port operation is one `POST` with a JSON body and a bearer token.
//! Requests are never retried; a failure is reported to the caller as-is.

use super::credentials::Credentials;
use super::wire::{
    CreateCollectorBody, CreateSurveyBody, IdResponse, MessagesResponse, SendMessagesBody,
};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use survey_application::{ServiceError, SurveyServicePort};
use survey_domain::{
    CollectorId, CollectorRequest, InvitationBatch, InvitationId, RecipientList, SurveyBlueprint,
    SurveyId,
};
use tracing::{debug, trace};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error bodies longer than this are cut before they reach the user
const MAX_ERROR_BODY_CHARS: usize = 500;

/// SurveyMonkey implementation of [`SurveyServicePort`]
pub struct SurveyMonkeyClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl SurveyMonkeyClient {
    pub fn new(credentials: Credentials) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("survey-invite/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self::with_client(http, credentials))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(http: reqwest::Client, credentials: Credentials) -> Self {
        Self { http, credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.credentials.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.credentials.access_token())
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY_CHARS),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        trace!("Response from {}: {}", url, text);

        serde_json::from_str(&text).map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[async_trait]
impl SurveyServicePort for SurveyMonkeyClient {
    async fn create_survey(&self, blueprint: &SurveyBlueprint) -> Result<SurveyId, ServiceError> {
        let response: IdResponse = self
            .post_json("surveys", &CreateSurveyBody::from(blueprint))
            .await?;

        response
            .into_id()
            .map(SurveyId::new)
            .ok_or_else(|| ServiceError::InvalidResponse("survey response has no id".to_string()))
    }

    async fn create_collector(
        &self,
        survey_id: &SurveyId,
        request: &CollectorRequest,
    ) -> Result<CollectorId, ServiceError> {
        let path = format!("surveys/{}/collectors", survey_id.as_str().trim());
        let response: IdResponse = self
            .post_json(&path, &CreateCollectorBody::from(request))
            .await?;

        response.into_id().map(CollectorId::new).ok_or_else(|| {
            ServiceError::InvalidResponse("collector response has no id".to_string())
        })
    }

    async fn send_invitations(
        &self,
        collector_id: &CollectorId,
        recipients: &RecipientList,
    ) -> Result<InvitationBatch, ServiceError> {
        let path = format!("collectors/{}/messages", collector_id.as_str().trim());
        let response: MessagesResponse = self
            .post_json(&path, &SendMessagesBody::from(recipients))
            .await?;

        let ids = response
            .data
            .into_iter()
            .map(|record| {
                record.into_id().map(InvitationId::new).ok_or_else(|| {
                    ServiceError::InvalidResponse("invitation record has no id".to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InvitationBatch::new(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use survey_domain::{EmailAddress, PageBlueprint, QuestionBlueprint};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// A request as seen by the test server: lowercased head, raw body
    struct Captured {
        head: String,
        body: String,
    }

    impl Captured {
        fn json(&self) -> Value {
            serde_json::from_str(&self.body).unwrap()
        }
    }

    /// Serve exactly one canned response and hand back the request
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let captured = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            captured
        });

        (format!("http://{}/v3", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> Captured {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    return Captured {
                        head,
                        body: String::from_utf8_lossy(&buf[end + 4..end + 4 + content_length])
                            .into_owned(),
                    };
                }
            }
        }
        Captured {
            head: String::from_utf8_lossy(&buf).to_lowercase(),
            body: String::new(),
        }
    }

    fn client(base_url: &str) -> SurveyMonkeyClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        SurveyMonkeyClient::with_client(http, Credentials::new("test-token", base_url).unwrap())
    }

    fn blueprint() -> SurveyBlueprint {
        SurveyBlueprint {
            title: "My Automated Survey".to_string(),
            pages: vec![PageBlueprint {
                title: "Page1".to_string(),
                questions: vec![QuestionBlueprint {
                    name: "Q1".to_string(),
                    heading: "Pick one".to_string(),
                    choices: vec!["A".to_string(), "B".to_string()],
                }],
            }],
        }
    }

    fn recipients(addresses: &[&str]) -> RecipientList {
        addresses.iter().filter_map(EmailAddress::try_new).collect()
    }

    #[tokio::test]
    async fn test_create_survey_posts_blueprint() {
        let (base, server) = serve_once(
            "201 Created",
            r#"{"id": "405", "title": "My Automated Survey"}"#,
        )
        .await;

        let id = client(&base).create_survey(&blueprint()).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(id, SurveyId::new("405"));
        assert!(request.head.starts_with("post /v3/surveys http/1.1"));
        assert!(request.head.contains("authorization: bearer test-token"));
        assert!(request.head.contains("content-type: application/json"));

        let body = request.json();
        assert_eq!(body["title"], "My Automated Survey");
        assert_eq!(body["pages"][0]["title"], "Page1");
        assert_eq!(
            body["pages"][0]["questions"][0]["question"]["family"],
            "single_choice"
        );
        assert_eq!(
            body["pages"][0]["questions"][0]["question"]["answers"]["choices"],
            json!([{"text": "A"}, {"text": "B"}])
        );
    }

    #[tokio::test]
    async fn test_numeric_id_is_normalized() {
        let (base, server) = serve_once("200 OK", r#"{"id": 123456}"#).await;

        let id = client(&base).create_survey(&blueprint()).await.unwrap();
        server.await.unwrap();

        assert_eq!(id.as_str(), "123456");
    }

    #[tokio::test]
    async fn test_create_collector_path_and_body() {
        let (base, server) = serve_once("201 Created", r#"{"id": "C-9", "type": "email"}"#).await;

        let id = client(&base)
            .create_collector(&SurveyId::new("405"), &CollectorRequest::email("Email Collector"))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(id, CollectorId::new("C-9"));
        assert!(request.head.starts_with("post /v3/surveys/405/collectors http/1.1"));
        assert_eq!(request.json(), json!({"name": "Email Collector", "type": "email"}));
    }

    #[tokio::test]
    async fn test_send_invitations_collects_ids() {
        let (base, server) = serve_once("200 OK", r#"{"data": [{"id": "m1"}, {"id": 2}]}"#).await;

        let batch = client(&base)
            .send_invitations(&CollectorId::new("C-9"), &recipients(&["a@x.io", "b@x.io"]))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(
            batch.invitation_ids,
            vec![InvitationId::new("m1"), InvitationId::new("2")]
        );
        assert!(request.head.starts_with("post /v3/collectors/c-9/messages http/1.1"));
        assert_eq!(
            request.json(),
            json!({"recipients": [{"email": "a@x.io"}, {"email": "b@x.io"}]})
        );
    }

    #[tokio::test]
    async fn test_send_invitations_without_data_is_empty_batch() {
        let (base, server) = serve_once("200 OK", r#"{}"#).await;

        let batch = client(&base)
            .send_invitations(&CollectorId::new("C-9"), &recipients(&["a@x.io"]))
            .await
            .unwrap();
        server.await.unwrap();

        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let (base, server) = serve_once(
            "401 Unauthorized",
            r#"{"error": {"message": "The authorization token provided was invalid."}}"#,
        )
        .await;

        let err = client(&base).create_survey(&blueprint()).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("authorization token provided was invalid"));
    }

    #[tokio::test]
    async fn test_missing_id_is_invalid_response() {
        let (base, server) = serve_once("200 OK", r#"{"title": "no id here"}"#).await;

        let err = client(&base).create_survey(&blueprint()).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let (base, server) = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = client(&base)
            .create_collector(&SurveyId::new("1"), &CollectorRequest::default())
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ServiceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}/v3", addr))
            .create_survey(&blueprint())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
