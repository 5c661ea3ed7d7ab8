//! Spotify Web API error types

use thiserror::Error;

/// Spotify Web API client errors
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Bearer token is missing or blank
    #[error("a Spotify user token is required")]
    MissingToken,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Spotify returned a non-success status
    #[error("Spotify API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("failed to parse Spotify response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for Spotify operations
pub type SpotifyResult<T> = Result<T, SpotifyError>;
