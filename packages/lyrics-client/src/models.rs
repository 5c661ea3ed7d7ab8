//! Song and lyric record types

use serde::{Deserialize, Serialize};

/// One song in a playlist, identified by artist and title
///
/// Identity is the (artist, title) pair; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDescriptor {
    /// Artist name
    pub artist: String,
    /// Track title
    pub title: String,
}

impl SongDescriptor {
    /// Create a song descriptor
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }
}

/// The lyric text for one song, present only when retrieval succeeded
///
/// Never constructed for a song whose lookup failed or returned blank text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricRecord {
    /// Artist name
    pub artist: String,
    /// Track title
    pub title: String,
    /// Lyric text (non-blank)
    pub lyrics: String,
}

// Internal response type for deserialization

/// Lyric lookup response body: `lyrics` on success, `error` on a miss
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_descriptor_new() {
        let song = SongDescriptor::new("Rihanna", "Diamonds");
        assert_eq!(song.artist, "Rihanna");
        assert_eq!(song.title, "Diamonds");
    }

    #[test]
    fn test_lookup_response_success_body() {
        let body = r#"{"lyrics": "Shine bright like a diamond"}"#;
        let response: LookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.lyrics.as_deref(),
            Some("Shine bright like a diamond")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn test_lookup_response_error_body() {
        let body = r#"{"error": "No lyrics found"}"#;
        let response: LookupResponse = serde_json::from_str(body).unwrap();
        assert!(response.lyrics.is_none());
        assert_eq!(response.error.as_deref(), Some("No lyrics found"));
    }
}
