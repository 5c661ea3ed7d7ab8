//! Mock lyric lookup server for testing retrieval
//!
//! Provides a [`MockLyricsServer`] that simulates a lyrics.ovh-style lookup
//! endpoint for testing lyric retrieval without a real service.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock lyric lookup server
pub struct MockLyricsServer {
    server: MockServer,
}

impl MockLyricsServer {
    /// Start a new mock lyric server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a successful lookup for one song
    ///
    /// Artist and title must not need URL encoding; use the underlying
    /// [`inner`](Self::inner) server for exotic names.
    pub async fn mock_lyrics(&self, artist: &str, title: &str, lyrics: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{}/{}", artist, title)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "lyrics": lyrics
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a "no lyrics found" miss for one song
    pub async fn mock_not_found(&self, artist: &str, title: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{}/{}", artist, title)))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "No lyrics found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a "no lyrics found" miss for every lookup
    pub async fn mock_not_found_all(&self) {
        Mock::given(method("GET"))
            .and(path_regex("^/v1/.+/.+$"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "No lyrics found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a lookup that succeeds but carries blank lyric text
    pub async fn mock_blank_lyrics(&self, artist: &str, title: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/{}/{}", artist, title)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "lyrics": ""
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of lookup requests the server has received
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lyrics_round_trip() {
        let server = MockLyricsServer::start().await;
        server.mock_lyrics("Rihanna", "Diamonds", "Shine bright").await;

        let body: serde_json::Value =
            reqwest::get(format!("{}/v1/Rihanna/Diamonds", server.url()))
                .await
                .unwrap()
                .json()
                .await
                .unwrap();

        assert_eq!(body["lyrics"], "Shine bright");
        assert_eq!(server.request_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_not_found_all() {
        let server = MockLyricsServer::start().await;
        server.mock_not_found_all().await;

        let response = reqwest::get(format!("{}/v1/Anyone/Anything", server.url()))
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
    }
}
