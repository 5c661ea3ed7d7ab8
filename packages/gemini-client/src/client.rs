//! Gemini generateContent client implementation

use std::fmt;
use std::time::Duration;

use moodring_shared_config::GeminiConfig;
use reqwest::Client;
use tracing::debug;

use crate::error::{GeminiError, GeminiResult};
use crate::models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, SentimentPayload,
    SentimentResult,
};

/// Maximum error body size to keep diagnostics bounded
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// System instruction constraining the model to the sentiment schema
const SYSTEM_INSTRUCTION: &str = "You are a professional music analysis engine. \
    Analyze the following combined lyrics from a playlist. \
    Your response MUST be a single JSON object that adheres strictly to the following schema. \
    Do not include any other text or explanation outside of the JSON object. \
    Identify the single most descriptive sentiment word or two that capture the overall feel of the lyrics.";

/// Gemini sentiment analysis client
///
/// One call per analysis run; failures are terminal for that attempt and are
/// never retried here.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.config.url)
            .field("model", &self.config.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiClient {
    /// Create a new Gemini client from configuration
    ///
    /// # Errors
    /// Returns `GeminiError::MissingApiKey` if the configured key is blank.
    /// Construction is the configuration boundary: a missing key aborts here,
    /// before any pipeline run begins.
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent("moodring/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// The response schema the model must satisfy
    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "sentimentWord": {
                    "type": "STRING",
                    "description": "A single word or two describing the sentiment."
                },
                "sentimentExplanation": {
                    "type": "STRING",
                    "description": "A short paragraph explaining the sentiment."
                }
            },
            "required": ["sentimentWord", "sentimentExplanation"]
        })
    }

    /// Build the generateContent request body for a block of lyrics
    fn build_request(combined_lyrics: &str) -> GenerateContentRequest {
        let user_query = format!(
            "Analyze the sentiment of this playlist's lyrics and explain your finding: \
             \n\n--- LYRICS ---\n\n{}",
            combined_lyrics
        );

        GenerateContentRequest {
            contents: vec![Content::text(user_query)],
            system_instruction: Content::text(SYSTEM_INSTRUCTION),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::response_schema(),
            },
        }
    }

    /// Truncate an error body to keep diagnostics bounded
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }

    /// Extract the inner sentiment JSON string from the response envelope
    ///
    /// The envelope walk (candidates → content → parts → text) lives here so
    /// malformed shapes are classified in exactly one place.
    fn extract_inner_text(envelope: GenerateContentResponse) -> GeminiResult<String> {
        let candidate = envelope
            .candidates
            .into_iter()
            .next()
            .ok_or(GeminiError::NoCandidates)?;

        let text = candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyText);
        }

        Ok(text)
    }

    /// Analyze the sentiment of the provided combined lyrics
    ///
    /// Sends one schema-constrained generateContent request and re-parses
    /// the inner JSON text into a [`SentimentResult`].
    pub async fn analyze_sentiment(&self, combined_lyrics: &str) -> GeminiResult<SentimentResult> {
        let request = Self::build_request(combined_lyrics);

        debug!(
            model = %self.config.model,
            lyrics_len = combined_lyrics.len(),
            "Requesting sentiment analysis"
        );

        let response = self
            .http_client
            .post(self.config.generate_content_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout(self.config.timeout_secs)
                } else {
                    GeminiError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidPayload(e.to_string()))?;

        let inner_text = Self::extract_inner_text(envelope)?;

        let payload: SentimentPayload = serde_json::from_str(&inner_text)
            .map_err(|e| GeminiError::InvalidPayload(e.to_string()))?;

        let result = SentimentResult::from(payload);

        debug!(
            sentiment_word = %result.sentiment_word,
            "Sentiment analysis complete"
        );

        Ok(result)
    }
}
