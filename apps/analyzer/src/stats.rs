//! Usage statistics persistence
//!
//! A durable counter of analysis attempts, kept in a small JSON document
//! that is read fully and rewritten fully on each increment. Storage errors
//! never reach the analysis pipeline: an unreadable store reads as zero and
//! a failed write degrades to a logged no-op.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Key under which the analysis counter is stored
const ANALYZED_PLAYLISTS_KEY: &str = "analyzedPlaylistsCount";

/// File-backed store for analysis usage statistics
///
/// Read-modify-write cycles are serialized by an internal mutex, so
/// concurrent pipeline runs within one process cannot lose increments.
/// Concurrent writers in separate processes remain a documented risk.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl StatsStore {
    /// Create a store backed by the JSON document at `path`
    ///
    /// The file is not created until the first increment.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Load the full statistics document, defaulting to empty on any error
    fn load(&self) -> BTreeMap<String, u64> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "Stats file unreadable, starting from defaults");
                BTreeMap::new()
            }),
            // Missing file is the normal first-run state
            Err(_) => BTreeMap::new(),
        }
    }

    /// Write the full statistics document back, degrading to a no-op on error
    fn save(&self, stats: &BTreeMap<String, u64>) {
        let contents = match serde_json::to_string_pretty(stats) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "Failed to serialize stats");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, contents) {
            warn!(path = %self.path.display(), error = %e, "Failed to write stats file");
        }
    }

    /// Number of analyses performed so far (zero when unknown)
    pub fn analyzed_playlists_count(&self) -> u64 {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        self.load()
            .get(ANALYZED_PLAYLISTS_KEY)
            .copied()
            .unwrap_or(0)
    }

    /// Record one more analysis attempt
    pub fn increment_analyzed_playlists(&self) {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut stats = self.load();
        *stats.entry(ANALYZED_PLAYLISTS_KEY.to_string()).or_insert(0) += 1;
        self.save(&stats);
    }
}
