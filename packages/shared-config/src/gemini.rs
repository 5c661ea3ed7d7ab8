//! Gemini sentiment service configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API base URL
    pub url: String,

    /// Model used for sentiment analysis
    pub model: String,

    /// API key (query-string authentication)
    pub api_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// `GEMINI_API_KEY` is required; a missing or blank key is a startup
    /// error, not a per-call failure.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = get_required_env("GEMINI_API_KEY")?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "GEMINI_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            url: get_env_or_default("GEMINI_API_URL", "https://generativelanguage.googleapis.com"),
            model: get_env_or_default("GEMINI_MODEL", "gemini-2.5-flash-preview-09-2025"),
            api_key,
            timeout_secs: parse_env("GEMINI_TIMEOUT", 30)?,
        })
    }

    /// Create a configuration with custom URL and API key (useful for testing)
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            api_key: api_key.into(),
            timeout_secs: 30,
        }
    }

    /// Get the full URL for the generateContent endpoint (without the key)
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.url.trim_end_matches('/'),
            self.model
        )
    }
}
