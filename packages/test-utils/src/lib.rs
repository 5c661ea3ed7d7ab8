//! Shared test utilities for the moodring workspace
//!
//! This crate provides mock implementations of the external lyric-lookup and
//! Gemini services for testing without network dependencies. The mocks are
//! used by the client crates' own suites and by the analyzer's integration
//! tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use moodring_test_utils::{MockGeminiServer, MockLyricsServer};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let lyrics = MockLyricsServer::start().await;
//!     lyrics.mock_lyrics("Rihanna", "Diamonds", "Shine bright like a diamond").await;
//!
//!     let gemini = MockGeminiServer::start().await;
//!     gemini.mock_sentiment("Joyful", "Upbeat lyrics.").await;
//!
//!     // Use lyrics.url() / gemini.url() to configure your clients
//! }
//! ```

mod gemini;
mod lyrics;

pub use gemini::MockGeminiServer;
pub use lyrics::MockLyricsServer;
