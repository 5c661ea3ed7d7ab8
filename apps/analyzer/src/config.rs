//! Analyzer configuration loaded from environment variables
//!
//! Configuration is loaded once at startup with sensible defaults for
//! everything except the Gemini API key, which is required and validated
//! before any pipeline run begins.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use moodring_shared_config::{CommonConfig, GeminiConfig, LyricsConfig, SpotifyConfig};

/// Default cap on songs sampled per analysis
const DEFAULT_MAX_SONGS: usize = 5;

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the client crates
    pub common: CommonConfig,

    /// Maximum number of songs sampled per analysis
    pub max_songs: usize,

    /// Path of the usage statistics JSON document
    pub stats_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Self {
            common,

            max_songs: env::var("MAX_SONGS")
                .unwrap_or_else(|_| DEFAULT_MAX_SONGS.to_string())
                .parse()
                .context("Invalid MAX_SONGS value")?,

            stats_file: PathBuf::from(
                env::var("STATS_FILE").unwrap_or_else(|_| "analysis_stats.json".to_string()),
            ),
        })
    }

    // Convenience accessors for common config fields

    /// Get Gemini configuration
    pub fn gemini(&self) -> &GeminiConfig {
        &self.common.gemini
    }

    /// Get lyric lookup configuration
    pub fn lyrics(&self) -> &LyricsConfig {
        &self.common.lyrics
    }

    /// Get Spotify configuration (if a token is present)
    pub fn spotify(&self) -> Option<&SpotifyConfig> {
        self.common.spotify.as_ref()
    }

    /// Check if Spotify integration is configured
    pub fn has_spotify(&self) -> bool {
        self.common.has_spotify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_songs() {
        let max_songs: usize = env::var("MOODRING_TEST_UNSET_VAR")
            .unwrap_or_else(|_| DEFAULT_MAX_SONGS.to_string())
            .parse()
            .unwrap();
        assert_eq!(max_songs, 5);
    }

    #[test]
    fn test_invalid_max_songs_fails_parsing() {
        let result: std::result::Result<usize, _> = "not_a_number".parse();
        assert!(result.is_err());
    }
}
