//! Spotify Web API configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};
use std::env;

/// Spotify Web API configuration
///
/// The token is a manually supplied user token; there is no OAuth flow or
/// token refreshing here.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// Spotify Web API base URL
    pub url: String,

    /// Bearer token for the current user
    pub token: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SpotifyConfig {
    /// Load Spotify configuration from environment variables
    ///
    /// Returns an error if `SPOTIFY_TOKEN` is not set. This allows consumers
    /// to call `.ok()` to get `Option<SpotifyConfig>`.
    pub fn from_env() -> ConfigResult<Self> {
        let token = get_required_env("SPOTIFY_TOKEN")?;

        if token.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SPOTIFY_TOKEN".to_string(),
                "token cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            url: get_env_or_default("SPOTIFY_API_URL", "https://api.spotify.com"),
            token,
            timeout_secs: parse_env("SPOTIFY_TIMEOUT", 10)?,
        })
    }

    /// Check if a Spotify token is present in the environment
    pub fn is_configured() -> bool {
        env::var("SPOTIFY_TOKEN").is_ok()
    }

    /// Create a configuration with custom URL and token (useful for testing)
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            timeout_secs: 10,
        }
    }

    /// Get the full URL for a Web API endpoint
    pub fn api_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/v1/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SpotifyConfig::new("http://localhost:7070", "test-token");
        assert_eq!(config.url, "http://localhost:7070");
        assert_eq!(config.token, "test-token");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_api_url() {
        let config = SpotifyConfig::new("http://localhost:7070", "token");
        assert_eq!(
            config.api_url("me/playlists"),
            "http://localhost:7070/v1/me/playlists"
        );
        assert_eq!(
            config.api_url("/playlists/abc/tracks"),
            "http://localhost:7070/v1/playlists/abc/tracks"
        );
    }

    #[test]
    fn test_api_url_with_trailing_slash() {
        let config = SpotifyConfig::new("http://localhost:7070/", "token");
        assert_eq!(
            config.api_url("me/playlists"),
            "http://localhost:7070/v1/me/playlists"
        );
    }
}
