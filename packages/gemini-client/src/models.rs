//! Request and response types for the Gemini generateContent API

use serde::{Deserialize, Serialize};

/// The sentiment derived from a playlist's combined lyrics
///
/// Immutable value object returned to the caller; produced once per
/// successful sentiment call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// A word or two describing the overall feel of the lyrics
    pub sentiment_word: String,
    /// A short paragraph explaining the sentiment
    pub sentiment_explanation: String,
}

// Request types

/// Top-level generateContent request body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// A content block: an ordered list of parts
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// One text part of a content block
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Part {
    pub text: String,
}

/// Generation configuration demanding a schema-constrained JSON reply
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

// Response types
//
// The reply is a nested envelope; every level is optional-with-default so a
// malformed shape surfaces as a classified error instead of a serde failure
// naming some internal field.

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// The schema-constrained JSON carried inside the envelope's text part
///
/// Missing fields fall back to defaults rather than failing, for robustness
/// against a non-compliant model.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SentimentPayload {
    #[serde(rename = "sentimentWord", default = "default_sentiment_word")]
    pub sentiment_word: String,
    #[serde(
        rename = "sentimentExplanation",
        default = "default_sentiment_explanation"
    )]
    pub sentiment_explanation: String,
}

fn default_sentiment_word() -> String {
    "Undetermined".to_string()
}

fn default_sentiment_explanation() -> String {
    "No explanation provided.".to_string()
}

impl From<SentimentPayload> for SentimentResult {
    fn from(payload: SentimentPayload) -> Self {
        Self {
            sentiment_word: payload.sentiment_word,
            sentiment_explanation: payload.sentiment_explanation,
        }
    }
}
