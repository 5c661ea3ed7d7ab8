//! Shared configuration types for moodring services
//!
//! This crate provides common configuration types used across the analyzer
//! and its client crates, ensuring consistency across the application.

mod error;
mod gemini;
mod lyrics;
mod spotify;

pub use error::{ConfigError, ConfigResult};
pub use gemini::GeminiConfig;
pub use lyrics::LyricsConfig;
pub use spotify::SpotifyConfig;

use std::env;

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Gemini sentiment service configuration
    pub gemini: GeminiConfig,

    /// Lyric lookup configuration
    pub lyrics: LyricsConfig,

    /// Spotify integration configuration (optional)
    pub spotify: Option<SpotifyConfig>,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            gemini: GeminiConfig::from_env()?,
            lyrics: LyricsConfig::from_env()?,
            spotify: SpotifyConfig::from_env().ok(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Check if Spotify integration is configured
    pub fn has_spotify(&self) -> bool {
        self.spotify.is_some()
    }
}

/// Helper function to get a required environment variable
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
