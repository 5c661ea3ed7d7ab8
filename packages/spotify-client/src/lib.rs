//! Spotify Web API client for moodring
//!
//! Fetches the current user's playlists, with their `(artist, title)` song
//! descriptors, using a manually supplied bearer token. This client does NOT
//! do OAuth or token refreshing; it exists so a playlist can be resolved for
//! analysis without a UI in front of the pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use moodring_spotify_client::SpotifyClient;
//! use moodring_shared_config::SpotifyConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpotifyClient::new(&SpotifyConfig::from_env()?)?;
//!
//! for playlist in client.get_current_user_playlists().await? {
//!     println!("{} ({} songs)", playlist.name, playlist.songs.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::SpotifyClient;
pub use error::{SpotifyError, SpotifyResult};
pub use models::SpotifyPlaylist;
