//! Spotify Web API client implementation

use std::fmt;
use std::time::Duration;

use moodring_lyrics_client::SongDescriptor;
use moodring_shared_config::SpotifyConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{SpotifyError, SpotifyResult};
use crate::models::{PagingObject, RawPlaylist, RawTrackEntry, SpotifyPlaylist};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Page size for playlist listing
const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Page size for playlist track listing
const TRACK_PAGE_LIMIT: u32 = 100;

/// Spotify Web API client working from a manually supplied user token
#[derive(Clone)]
pub struct SpotifyClient {
    http_client: Client,
    config: SpotifyConfig,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("url", &self.config.url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl SpotifyClient {
    /// Create a new Spotify client from configuration
    ///
    /// # Errors
    /// Returns `SpotifyError::MissingToken` if the token is blank.
    pub fn new(config: &SpotifyConfig) -> SpotifyResult<Self> {
        if config.token.trim().is_empty() {
            return Err(SpotifyError::MissingToken);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent("moodring/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Send a GET to a Web API endpoint and deserialize the JSON response
    async fn send_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> SpotifyResult<T> {
        let response = self
            .http_client
            .get(self.config.api_url(path))
            .bearer_auth(&self.config.token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the songs of one playlist in playlist order
    ///
    /// Entries without a `track` object (removed or local tracks) are
    /// skipped; missing names fall back to placeholders.
    async fn fetch_playlist_songs(&self, playlist_id: &str) -> SpotifyResult<Vec<SongDescriptor>> {
        let page: PagingObject<RawTrackEntry> = self
            .send_get(
                &format!("playlists/{}/tracks", playlist_id),
                &[("limit", TRACK_PAGE_LIMIT.to_string())],
            )
            .await?;

        Ok(page
            .items
            .into_iter()
            .filter_map(|entry| entry.track)
            .map(|track| track.into_song())
            .collect())
    }

    /// Fetch one playlist (name and songs) by id
    #[instrument(skip(self))]
    pub async fn get_playlist(&self, playlist_id: &str) -> SpotifyResult<SpotifyPlaylist> {
        let raw: RawPlaylist = self
            .send_get(&format!("playlists/{}", playlist_id), &[])
            .await?;
        let songs = self.fetch_playlist_songs(&raw.id).await?;

        debug!(playlist = %raw.name, song_count = songs.len(), "Resolved playlist");

        Ok(SpotifyPlaylist {
            id: raw.id,
            name: raw.name,
            songs,
        })
    }

    /// Fetch all playlists for the user represented by the supplied token
    #[instrument(skip(self))]
    pub async fn get_current_user_playlists(&self) -> SpotifyResult<Vec<SpotifyPlaylist>> {
        let page: PagingObject<RawPlaylist> = self
            .send_get(
                "me/playlists",
                &[("limit", PLAYLIST_PAGE_LIMIT.to_string())],
            )
            .await?;

        let mut playlists = Vec::with_capacity(page.items.len());
        for raw in page.items {
            let songs = self.fetch_playlist_songs(&raw.id).await?;
            playlists.push(SpotifyPlaylist {
                id: raw.id,
                name: raw.name,
                songs,
            });
        }

        debug!(playlist_count = playlists.len(), "Listed user playlists");

        Ok(playlists)
    }
}
