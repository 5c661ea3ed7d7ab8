//! Lyric lookup service configuration types

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Lyric lookup service configuration
#[derive(Debug, Clone)]
pub struct LyricsConfig {
    /// Lyric lookup base URL
    pub url: String,

    /// Per-lookup request timeout in seconds
    pub timeout_secs: u64,
}

impl LyricsConfig {
    /// Load lyric lookup configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            url: get_env_or_default("LYRICS_API_URL", "https://api.lyrics.ovh"),
            timeout_secs: parse_env("LYRICS_TIMEOUT", 10)?,
        })
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 10,
        }
    }
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            url: "https://api.lyrics.ovh".to_string(),
            timeout_secs: 10,
        }
    }
}
