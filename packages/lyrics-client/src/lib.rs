//! Lyric lookup client for moodring
//!
//! This crate provides a client for a lyrics.ovh-style lookup service,
//! fetching lyric text for `(artist, title)` pairs.
//!
//! Retrieval is best-effort: any failure to obtain lyrics for one song
//! (HTTP error, "not found" body, blank lyric text, transport error) skips
//! that song and continues with the next one. The skip policy is explicit:
//! [`LyricsClient::fetch_song`] classifies each miss as a [`SkipReason`],
//! and [`LyricsClient::fetch_lyrics`] keeps only the successes.
//!
//! # Example
//!
//! ```rust,no_run
//! use moodring_lyrics_client::{LyricsClient, SongDescriptor};
//! use moodring_shared_config::LyricsConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LyricsClient::new(&LyricsConfig::default())?;
//!
//! let songs = vec![SongDescriptor::new("Rihanna", "Diamonds")];
//! let records = client.fetch_lyrics(&songs, 5).await;
//! for record in records {
//!     println!("{} - {}: {} bytes", record.artist, record.title, record.lyrics.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::LyricsClient;
pub use error::{LyricsError, LyricsResult, SkipReason};
pub use models::{LyricRecord, SongDescriptor};
