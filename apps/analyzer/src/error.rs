//! Analysis pipeline error types
//!
//! Only two shapes cross the pipeline's output boundary: a success value or
//! one of these failures. Every intermediate error is caught, classified,
//! and converted into one of the fixed or templated messages below; the
//! `Display` strings ARE the contract with the presenting collaborator.

use moodring_gemini_client::GeminiError;
use thiserror::Error;

/// A failed analysis run, rendered for the caller as one descriptive string
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The supplied playlist had no songs; detected before any network call
    #[error("Selected playlist is empty")]
    EmptyPlaylist,

    /// No song in the sample yielded lyrics
    #[error("No lyrics found")]
    NoLyricsFound,

    /// The sentiment service call failed (status, transport, or schema)
    #[error("Failed to connect to the sentiment analysis service: {0}")]
    Service(#[from] GeminiError),

    /// Anything else that interrupted the run
    #[error("An unexpected error occurred during analysis: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            AnalysisError::EmptyPlaylist.to_string(),
            "Selected playlist is empty"
        );
        assert_eq!(AnalysisError::NoLyricsFound.to_string(), "No lyrics found");
    }

    #[test]
    fn test_service_message_carries_detail() {
        let err = AnalysisError::Service(GeminiError::Api {
            status: 503,
            body: "overloaded".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to connect to the sentiment analysis service: \
             Gemini API error (status 503): overloaded"
        );
    }

    #[test]
    fn test_unexpected_message_carries_detail() {
        let err = AnalysisError::Unexpected("task cancelled".to_string());
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred during analysis: task cancelled"
        );
    }
}
