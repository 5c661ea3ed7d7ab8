//! Error types for the Gemini client

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    /// API key is missing or blank
    #[error("Gemini API key is missing or empty")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Gemini API returned a non-success status
    #[error("Gemini API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response envelope carried no candidates
    #[error("response missing candidates")]
    NoCandidates,

    /// Candidate content held no usable text
    #[error("model returned empty text content")]
    EmptyText,

    /// Inner text was not the expected JSON payload
    #[error("model reply was not valid JSON: {0}")]
    InvalidPayload(String),
}

/// Result type for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = GeminiError::Api {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error (status 503): overloaded");
    }

    #[test]
    fn test_envelope_error_display() {
        assert_eq!(
            GeminiError::NoCandidates.to_string(),
            "response missing candidates"
        );
        assert_eq!(
            GeminiError::EmptyText.to_string(),
            "model returned empty text content"
        );
    }
}
