//! moodring playlist sentiment analysis pipeline
//!
//! Given a playlist (id, name, ordered `(artist, title)` song descriptors),
//! the pipeline samples a bounded random subset of songs, retrieves their
//! lyrics best-effort, aggregates the text, and asks the Gemini sentiment
//! service for a schema-constrained verdict. The outcome is either a
//! sentiment word plus explanation, or one descriptive failure string.
//!
//! Each run is independent; the only state shared between runs is the
//! [`stats::StatsStore`] usage counter.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sampler;
pub mod stats;

pub use config::Config;
pub use error::AnalysisError;
pub use models::{AnalysisOutput, Playlist};
pub use pipeline::Analyzer;
pub use stats::StatsStore;
