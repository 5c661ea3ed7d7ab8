//! The playlist analysis pipeline
//!
//! A linear interactor with three short-circuit exits: empty playlist,
//! zero lyric records, and sentiment-service failure. The usage counter is
//! incremented once the playlist and lyric checks pass, before the
//! sentiment call's outcome is known: it counts attempts, not successes.

use moodring_gemini_client::GeminiClient;
use moodring_lyrics_client::LyricsClient;
use tracing::{debug, info};

use crate::aggregate;
use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::{AnalysisOutput, Playlist};
use crate::sampler;
use crate::stats::StatsStore;

/// Orchestrates one analysis run: sample, retrieve, count, aggregate, judge
#[derive(Debug)]
pub struct Analyzer {
    lyrics: LyricsClient,
    gemini: GeminiClient,
    stats: StatsStore,
    max_songs: usize,
}

impl Analyzer {
    /// Create an analyzer from already-constructed collaborators
    pub fn new(
        lyrics: LyricsClient,
        gemini: GeminiClient,
        stats: StatsStore,
        max_songs: usize,
    ) -> Self {
        Self {
            lyrics,
            gemini,
            stats,
            max_songs,
        }
    }

    /// Create an analyzer from configuration
    ///
    /// Fails eagerly on configuration problems (notably a missing Gemini
    /// API key) so no pipeline run ever starts against a broken setup.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let lyrics = LyricsClient::new(config.lyrics())?;
        let gemini = GeminiClient::new(config.gemini())?;
        let stats = StatsStore::new(&config.stats_file);

        Ok(Self::new(lyrics, gemini, stats, config.max_songs))
    }

    /// The usage statistics store shared across runs
    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    /// Analyze one playlist
    ///
    /// Stateless apart from the stats counter; the returned future is the
    /// background-dispatch boundary for callers that must not block a UI
    /// thread.
    pub async fn analyze(&self, playlist: &Playlist) -> Result<AnalysisOutput, AnalysisError> {
        info!(
            playlist = %playlist.name,
            song_count = playlist.songs.len(),
            "Analyzing playlist"
        );

        if playlist.songs.is_empty() {
            return Err(AnalysisError::EmptyPlaylist);
        }

        let sampled = sampler::sample(&playlist.songs, self.max_songs);
        debug!(sampled = sampled.len(), "Sampled songs for retrieval");

        let records = self.lyrics.fetch_lyrics(&sampled, self.max_songs).await;
        if records.is_empty() {
            return Err(AnalysisError::NoLyricsFound);
        }

        // Counts attempts: the increment happens before the sentiment
        // verdict is known, so a failing service call still counts.
        self.stats.increment_analyzed_playlists();

        // Non-empty by construction: records only exist with non-blank lyrics
        let combined = aggregate::combine(&records);

        let sentiment = self.gemini.analyze_sentiment(&combined).await?;

        info!(
            playlist = %playlist.name,
            sentiment_word = %sentiment.sentiment_word,
            records = records.len(),
            "Analysis complete"
        );

        Ok(AnalysisOutput {
            sentiment_word: sentiment.sentiment_word,
            sentiment_explanation: sentiment.sentiment_explanation,
            records,
        })
    }
}
