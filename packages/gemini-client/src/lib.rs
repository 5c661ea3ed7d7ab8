//! Gemini API client for moodring sentiment analysis
//!
//! This crate provides a client for the Gemini `generateContent` endpoint,
//! constrained to answer with a single JSON object carrying a sentiment
//! word and explanation for a block of combined playlist lyrics.
//!
//! The model is forced onto that shape with a `generationConfig.responseSchema`;
//! the reply arrives as a nested envelope (candidates → content → parts →
//! text) whose inner text is itself JSON and is re-parsed into a
//! [`SentimentResult`].
//!
//! # Example
//!
//! ```rust,no_run
//! use moodring_gemini_client::GeminiClient;
//! use moodring_shared_config::GeminiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfig::from_env()?;
//! let client = GeminiClient::new(&config)?;
//!
//! let result = client
//!     .analyze_sentiment("Shine bright like a diamond\n")
//!     .await?;
//! println!("{}: {}", result.sentiment_word, result.sentiment_explanation);
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! The API key is validated at construction time; a missing key aborts
//! client construction rather than surfacing as a per-call failure.

mod client;
mod error;
mod models;

pub use client::GeminiClient;
pub use error::{GeminiError, GeminiResult};
pub use models::SentimentResult;
