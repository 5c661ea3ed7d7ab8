//! Common test utilities for analyzer integration tests

#![allow(dead_code)]

pub use moodring_test_utils::{MockGeminiServer, MockLyricsServer};

use moodring_analyzer::{Analyzer, Playlist, StatsStore};
use moodring_gemini_client::GeminiClient;
use moodring_lyrics_client::{LyricsClient, SongDescriptor};
use moodring_shared_config::{GeminiConfig, LyricsConfig};

/// Default song cap used by the test analyzer
pub const TEST_MAX_SONGS: usize = 5;

/// A fully wired analyzer talking to mock lyric and Gemini servers
pub struct TestHarness {
    pub lyrics: MockLyricsServer,
    pub gemini: MockGeminiServer,
    pub analyzer: Analyzer,
    // Keeps the stats file alive for the harness lifetime
    stats_dir: tempfile::TempDir,
}

impl TestHarness {
    pub async fn start() -> Self {
        let lyrics = MockLyricsServer::start().await;
        let gemini = MockGeminiServer::start().await;
        let stats_dir = tempfile::tempdir().expect("temp dir");

        let lyrics_client =
            LyricsClient::new(&LyricsConfig::with_url(lyrics.url())).expect("lyrics client");
        let gemini_client =
            GeminiClient::new(&GeminiConfig::new(gemini.url(), "test-key")).expect("gemini client");
        let stats = StatsStore::new(stats_dir.path().join("analysis_stats.json"));

        let analyzer = Analyzer::new(lyrics_client, gemini_client, stats, TEST_MAX_SONGS);

        Self {
            lyrics,
            gemini,
            analyzer,
            stats_dir,
        }
    }

    pub fn analyzed_count(&self) -> u64 {
        self.analyzer.stats().analyzed_playlists_count()
    }
}

/// Build a playlist from (artist, title) pairs
pub fn playlist(songs: &[(&str, &str)]) -> Playlist {
    Playlist {
        id: "test-playlist".to_string(),
        name: "Test Playlist".to_string(),
        songs: songs
            .iter()
            .map(|(artist, title)| SongDescriptor::new(*artist, *title))
            .collect(),
    }
}
