//! HTTP client for the interview-generation webhook
//!
//! Sends one JSON `POST` per submission and maps the response to either a
//! `SubmissionResult` or a `SubmissionError`. No retries.

use super::error::SubmissionError;
use crate::state::SubmissionPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::traits::SubmissionClientTrait;

const USER_AGENT: &str = concat!("interview-tui/", env!("CARGO_PKG_VERSION"));

/// Shown on success when the endpoint does not provide its own message
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Interview questions generated and sent to all recipients!";

/// Shown when the endpoint reports `success: false` without a message
pub const DEFAULT_REJECTION_MESSAGE: &str = "The webhook reported that the request failed.";

/// Outcome of a completed round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

/// Body returned by the endpoint on 2xx; both fields optional
#[derive(Debug, Default, Deserialize)]
struct WebhookResponse {
    success: Option<bool>,
    message: Option<String>,
}

/// Map an HTTP status and body to the submission outcome.
///
/// Non-2xx fails regardless of body. On 2xx the body must be JSON;
/// `success` defaults to true and `message` to the canned text.
pub fn interpret_response(
    status: StatusCode,
    body: &[u8],
) -> Result<SubmissionResult, SubmissionError> {
    if !status.is_success() {
        return Err(SubmissionError::Transport {
            status: status.as_u16(),
        });
    }

    let response: WebhookResponse = serde_json::from_slice(body)
        .map_err(|e| SubmissionError::Unknown(format!("Invalid response body: {e}")))?;

    if response.success == Some(false) {
        return Err(SubmissionError::Rejected(
            response
                .message
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
        ));
    }

    Ok(SubmissionResult {
        success: true,
        message: response
            .message
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
    })
}

/// Client for the configured webhook endpoint
pub struct WebhookClient {
    http_client: reqwest::Client,
    /// Endpoint address, `None` when unconfigured
    endpoint: Option<String>,
}

impl WebhookClient {
    /// Create a client for the given endpoint. Blank addresses count as unconfigured.
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_http_client(endpoint, http_client))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(endpoint: Option<String>, http_client: reqwest::Client) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Self {
            http_client,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl SubmissionClientTrait for WebhookClient {
    fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionResult, SubmissionError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(SubmissionError::Configuration)?;

        tracing::debug!(endpoint = %endpoint, "Posting submission to webhook");

        let response = self
            .http_client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Unknown(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Transport {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::Unknown(format!("Failed to read response: {e}")))?;

        interpret_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Difficulty;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn sample_payload() -> SubmissionPayload {
        SubmissionPayload {
            job_role: "Backend Engineer".to_string(),
            difficulty_level: Some(Difficulty::Easy),
            objective_questions: 10,
            programming_questions: 5,
            submitter_email: "me@x.com".to_string(),
            recipient_emails: vec!["a@x.com".to_string()],
            submitted_at: "2024-03-05T14:30:00.000Z".to_string(),
        }
    }

    fn local_client(endpoint: Option<String>) -> WebhookClient {
        let http_client = reqwest::Client::builder().no_proxy().build().unwrap();
        WebhookClient::with_http_client(endpoint, http_client)
    }

    /// Serve exactly one HTTP response and hand back the raw request text
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/webhook", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let content_length = headers
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (url, handle)
    }

    mod interpret {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_with_message() {
            let result = interpret_response(
                StatusCode::OK,
                br#"{"success": true, "message": "Sent 15 questions"}"#,
            );
            assert_eq!(
                result,
                Ok(SubmissionResult {
                    success: true,
                    message: "Sent 15 questions".to_string(),
                })
            );
        }

        #[test]
        fn test_defaults_when_fields_absent() {
            let result = interpret_response(StatusCode::OK, b"{}").unwrap();
            assert!(result.success);
            assert_eq!(result.message, DEFAULT_SUCCESS_MESSAGE);
        }

        #[test]
        fn test_non_success_status_ignores_body() {
            let result = interpret_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"success": true, "message": "all good"}"#,
            );
            assert_eq!(result, Err(SubmissionError::Transport { status: 500 }));
        }

        #[test]
        fn test_explicit_false_is_rejected() {
            let result = interpret_response(
                StatusCode::OK,
                br#"{"success": false, "message": "Quota exceeded"}"#,
            );
            assert_eq!(
                result,
                Err(SubmissionError::Rejected("Quota exceeded".to_string()))
            );

            let result = interpret_response(StatusCode::ACCEPTED, br#"{"success": false}"#);
            assert_eq!(
                result,
                Err(SubmissionError::Rejected(DEFAULT_REJECTION_MESSAGE.to_string()))
            );
        }

        #[test]
        fn test_invalid_json_is_unknown() {
            let result = interpret_response(StatusCode::OK, b"<html>ok</html>");
            assert!(matches!(result, Err(SubmissionError::Unknown(_))));

            let result = interpret_response(StatusCode::OK, b"");
            assert!(matches!(result, Err(SubmissionError::Unknown(_))));
        }
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_endpoint_is_unconfigured() {
            let client = local_client(Some("   ".to_string()));
            assert!(!client.is_configured());
            assert!(client.endpoint().is_none());
        }

        #[test]
        fn test_endpoint_is_trimmed() {
            let client = local_client(Some(" http://localhost/hook ".to_string()));
            assert_eq!(client.endpoint(), Some("http://localhost/hook"));
        }

        #[test]
        fn test_new_builds_client() {
            let client = WebhookClient::new(None).unwrap();
            assert!(!client.is_configured());
        }

        #[test]
        fn test_unconfigured_submit_fails_without_network() {
            let client = local_client(None);
            let result = tokio_test::block_on(client.submit(&sample_payload()));
            assert_eq!(result, Err(SubmissionError::Configuration));
        }
    }

    mod round_trip {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_posts_json_and_reads_message() {
            let (url, server) =
                serve_once("200 OK", r#"{"success":true,"message":"Sent 15 questions"}"#).await;
            let client = local_client(Some(url));

            let result = client.submit(&sample_payload()).await.unwrap();
            assert_eq!(result.message, "Sent 15 questions");

            let request = server.await.unwrap();
            assert!(request.starts_with("POST /webhook HTTP/1.1"));
            assert!(request
                .to_lowercase()
                .contains("content-type: application/json"));

            let body_start = request.find("\r\n\r\n").unwrap() + 4;
            let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
            assert_eq!(body["jobRole"], "Backend Engineer");
            assert_eq!(body["difficultyLevel"], "easy");
            assert_eq!(body["recipientEmails"], serde_json::json!(["a@x.com"]));
        }

        #[tokio::test]
        async fn test_server_error_maps_to_transport() {
            let (url, server) = serve_once("500 Internal Server Error", r#"{"success":true}"#).await;
            let client = local_client(Some(url));

            let result = client.submit(&sample_payload()).await;
            assert_eq!(result, Err(SubmissionError::Transport { status: 500 }));
            server.await.unwrap();
        }

        #[tokio::test]
        async fn test_rejection_in_success_body() {
            let (url, server) =
                serve_once("200 OK", r#"{"success":false,"message":"No quota"}"#).await;
            let client = local_client(Some(url));

            let result = client.submit(&sample_payload()).await;
            assert_eq!(result, Err(SubmissionError::Rejected("No quota".to_string())));
            server.await.unwrap();
        }

        #[tokio::test]
        async fn test_connection_refused_is_unknown() {
            // Bind then drop to get a port nobody listens on
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let url = format!("http://{}/webhook", listener.local_addr().unwrap());
            drop(listener);

            let client = local_client(Some(url));
            let result = client.submit(&sample_payload()).await;
            assert!(matches!(result, Err(SubmissionError::Unknown(_))));
        }
    }
}
