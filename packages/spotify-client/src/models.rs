//! Spotify Web API response models

use moodring_lyrics_client::SongDescriptor;
use serde::{Deserialize, Serialize};

/// A playlist resolved through the Spotify Web API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyPlaylist {
    /// Spotify playlist id
    pub id: String,
    /// Display name
    pub name: String,
    /// Song descriptors in playlist order
    pub songs: Vec<SongDescriptor>,
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct PagingObject<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlaylist {
    pub id: String,
    pub name: String,
}

/// A playlist track entry; removed or local tracks have no `track` object
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrackEntry {
    #[serde(default)]
    pub track: Option<RawTrack>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "Vec::new")]
    pub artists: Vec<RawArtist>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArtist {
    #[serde(default)]
    pub name: Option<String>,
}

impl RawTrack {
    /// Convert to a song descriptor, falling back to placeholder names
    ///
    /// Only the first artist is kept.
    pub fn into_song(self) -> SongDescriptor {
        let title = self
            .name
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown Title".to_string());
        let artist = self
            .artists
            .into_iter()
            .next()
            .and_then(|a| a.name)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown Artist".to_string());

        SongDescriptor { artist, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_song() {
        let raw = RawTrack {
            name: Some("Diamonds".to_string()),
            artists: vec![
                RawArtist {
                    name: Some("Rihanna".to_string()),
                },
                RawArtist {
                    name: Some("Sia".to_string()),
                },
            ],
        };
        let song = raw.into_song();
        assert_eq!(song.artist, "Rihanna");
        assert_eq!(song.title, "Diamonds");
    }

    #[test]
    fn test_into_song_fallbacks() {
        let raw = RawTrack {
            name: None,
            artists: vec![],
        };
        let song = raw.into_song();
        assert_eq!(song.artist, "Unknown Artist");
        assert_eq!(song.title, "Unknown Title");
    }

    #[test]
    fn test_track_entry_without_track() {
        let entry: RawTrackEntry = serde_json::from_str(r#"{"track": null}"#).unwrap();
        assert!(entry.track.is_none());
    }
}
