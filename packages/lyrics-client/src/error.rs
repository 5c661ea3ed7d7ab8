//! Lyric lookup error types

use thiserror::Error;

/// Errors that prevent the lyric client from being constructed or used at all
#[derive(Error, Debug)]
pub enum LyricsError {
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for lyric client operations
pub type LyricsResult<T> = Result<T, LyricsError>;

/// Why a single song's lyric lookup yielded no record
///
/// Per-song failures never escape [`crate::LyricsClient::fetch_lyrics`];
/// they only reduce the yield of successful records. This type makes the
/// skip policy visible and testable instead of hiding it behind a
/// catch-and-continue.
#[derive(Error, Debug)]
pub enum SkipReason {
    /// Lookup returned a non-success HTTP status
    #[error("lookup returned status {0}")]
    Status(u16),

    /// Lookup body carried an explicit error field (song not found)
    #[error("lookup reported an error: {0}")]
    NotFound(String),

    /// Lookup succeeded but the lyric text was missing or blank
    #[error("lyrics were missing or blank")]
    BlankLyrics,

    /// Response body was not the expected JSON shape
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// Request timed out
    #[error("lookup timed out")]
    Timeout,

    /// Transport-level failure (connection refused, DNS, etc.)
    #[error("transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::Status(404).to_string(),
            "lookup returned status 404"
        );
        assert_eq!(
            SkipReason::NotFound("No lyrics found".to_string()).to_string(),
            "lookup reported an error: No lyrics found"
        );
        assert_eq!(
            SkipReason::BlankLyrics.to_string(),
            "lyrics were missing or blank"
        );
    }
}
