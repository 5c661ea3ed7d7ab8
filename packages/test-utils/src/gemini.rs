//! Mock Gemini server for testing sentiment analysis
//!
//! Provides a [`MockGeminiServer`] that simulates the generateContent
//! endpoint, wrapping canned sentiment payloads in the nested response
//! envelope the real API produces.

use serde_json::json;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock Gemini server
pub struct MockGeminiServer {
    server: MockServer,
}

impl MockGeminiServer {
    /// Start a new mock Gemini server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Regex matching any model's generateContent endpoint
    const GENERATE_CONTENT_PATH: &'static str = "^/v1beta/models/.+:generateContent$";

    /// Mount a successful sentiment analysis response
    pub async fn mock_sentiment(&self, word: &str, explanation: &str) {
        let inner = serde_json::to_string(&json!({
            "sentimentWord": word,
            "sentimentExplanation": explanation
        }))
        .unwrap();

        self.mock_inner_text(&inner).await;
    }

    /// Mount a response whose envelope carries the given inner text verbatim
    pub async fn mock_inner_text(&self, inner_text: &str) {
        Mock::given(method("POST"))
            .and(path_regex(Self::GENERATE_CONTENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {"content": {"parts": [{"text": inner_text}], "role": "model"}}
                ]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a response with an empty candidate list
    pub async fn mock_empty_candidates(&self) {
        Mock::given(method("POST"))
            .and(path_regex(Self::GENERATE_CONTENT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a failure response with the given status
    pub async fn mock_failure(&self, status_code: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path_regex(Self::GENERATE_CONTENT_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of generateContent requests the server has received
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Get a reference to the underlying mock server for custom setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}
