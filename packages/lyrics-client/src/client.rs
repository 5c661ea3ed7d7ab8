//! Lyric lookup client implementation

use std::time::Duration;

use moodring_shared_config::LyricsConfig;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{LyricsResult, SkipReason};
use crate::models::{LookupResponse, LyricRecord, SongDescriptor};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Lyric lookup client
///
/// One GET per song; no retry on individual failures. The design relies on
/// having multiple candidate songs instead of retrying one.
#[derive(Debug, Clone)]
pub struct LyricsClient {
    http_client: Client,
    config: LyricsConfig,
}

impl LyricsClient {
    /// Create a new lyric lookup client from configuration
    pub fn new(config: &LyricsConfig) -> LyricsResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .user_agent("moodring/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Build the lookup URL for one song, URL-encoding artist and title
    fn lookup_url(&self, song: &SongDescriptor) -> String {
        format!(
            "{}/v1/{}/{}",
            self.config.url.trim_end_matches('/'),
            urlencoding::encode(&song.artist),
            urlencoding::encode(&song.title)
        )
    }

    /// Look up the lyrics for a single song
    ///
    /// A miss of any kind is classified as a [`SkipReason`]; callers decide
    /// whether to surface or absorb it. [`fetch_lyrics`](Self::fetch_lyrics)
    /// absorbs all of them.
    #[instrument(skip(self), fields(artist = %song.artist, title = %song.title))]
    pub async fn fetch_song(&self, song: &SongDescriptor) -> Result<LyricRecord, SkipReason> {
        let url = self.lookup_url(song);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SkipReason::Timeout
            } else {
                SkipReason::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkipReason::Status(status.as_u16()));
        }

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| SkipReason::MalformedBody(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(SkipReason::NotFound(error));
        }

        match body.lyrics {
            Some(lyrics) if !lyrics.trim().is_empty() => Ok(LyricRecord {
                artist: song.artist.clone(),
                title: song.title.clone(),
                lyrics,
            }),
            _ => Err(SkipReason::BlankLyrics),
        }
    }

    /// Fetch lyrics for the given songs, best effort
    ///
    /// Songs are looked up in order; any song whose lookup misses is skipped
    /// silently and retrieval continues with the next one. Stops once `max`
    /// records have been collected or the list is exhausted. The returned
    /// records preserve the input order.
    pub async fn fetch_lyrics(&self, songs: &[SongDescriptor], max: usize) -> Vec<LyricRecord> {
        let mut records = Vec::new();

        for song in songs {
            if records.len() >= max {
                break;
            }
            match self.fetch_song(song).await {
                Ok(record) => {
                    debug!(
                        artist = %record.artist,
                        title = %record.title,
                        lyrics_len = record.lyrics.len(),
                        "Collected lyrics"
                    );
                    records.push(record);
                }
                Err(reason) => {
                    debug!(
                        artist = %song.artist,
                        title = %song.title,
                        reason = %reason,
                        "Skipping song"
                    );
                }
            }
        }

        debug!(
            candidates = songs.len(),
            collected = records.len(),
            "Lyric retrieval finished"
        );

        records
    }
}
