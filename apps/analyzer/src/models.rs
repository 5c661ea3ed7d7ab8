//! Pipeline input and output types

use moodring_lyrics_client::{LyricRecord, SongDescriptor};
use moodring_spotify_client::SpotifyPlaylist;
use serde::{Deserialize, Serialize};

/// The playlist handed to the pipeline by the collaborating application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered song descriptors
    pub songs: Vec<SongDescriptor>,
}

impl From<SpotifyPlaylist> for Playlist {
    fn from(playlist: SpotifyPlaylist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            songs: playlist.songs,
        }
    }
}

/// The result of a successful analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// A word or two describing the playlist's overall feel
    pub sentiment_word: String,
    /// A short paragraph explaining the sentiment
    pub sentiment_explanation: String,
    /// The lyric records the verdict was based on, in retrieval order
    pub records: Vec<LyricRecord>,
}
