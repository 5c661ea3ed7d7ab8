use std::sync::Arc;

use anyhow::Context;
use moodring_analyzer::{AnalysisError, Analyzer, Config, Playlist};
use moodring_spotify_client::SpotifyClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where the playlist to analyze comes from
enum PlaylistSource {
    /// A JSON file with {id, name, songs: [{artist, title}]}
    File(String),
    /// A playlist id resolved through the Spotify Web API
    Spotify(String),
}

fn parse_args(args: &[String]) -> anyhow::Result<PlaylistSource> {
    match args {
        [flag, playlist_id] if flag == "--spotify" => {
            Ok(PlaylistSource::Spotify(playlist_id.clone()))
        }
        [path] if path != "--spotify" => Ok(PlaylistSource::File(path.clone())),
        _ => anyhow::bail!("Usage: moodring-analyzer <playlist.json> | --spotify <playlist-id>"),
    }
}

async fn resolve_playlist(config: &Config, source: PlaylistSource) -> anyhow::Result<Playlist> {
    match source {
        PlaylistSource::File(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read playlist file {}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid playlist JSON in {}", path))
        }
        PlaylistSource::Spotify(playlist_id) => {
            let spotify_config = config
                .spotify()
                .context("SPOTIFY_TOKEN is not set; it is required for --spotify")?;
            let client = SpotifyClient::new(spotify_config)?;
            Ok(client.get_playlist(&playlist_id).await?.into())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodring_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = parse_args(&args)?;

    let config = Config::from_env()?;
    let analyzer = Arc::new(Analyzer::from_config(&config)?);
    let playlist = resolve_playlist(&config, source).await?;

    // The pipeline runs on its own task; a UI embedding would hook a
    // completion callback onto this handle instead of blocking its thread.
    let task = {
        let analyzer = Arc::clone(&analyzer);
        let playlist = playlist.clone();
        tokio::spawn(async move { analyzer.analyze(&playlist).await })
    };

    let outcome = match task.await {
        Ok(result) => result,
        Err(e) => Err(AnalysisError::Unexpected(e.to_string())),
    };

    match outcome {
        Ok(output) => {
            println!("Playlist: {}", playlist.name);
            println!("Sentiment: {}", output.sentiment_word);
            println!("{}", output.sentiment_explanation);
            println!();
            println!("Based on lyrics from:");
            for record in &output.records {
                println!("  {} - {}", record.artist, record.title);
            }
            println!();
            println!(
                "Playlists analyzed so far: {}",
                analyzer.stats().analyzed_playlists_count()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
