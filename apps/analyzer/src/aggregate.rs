//! Lyric aggregation
//!
//! Merges the retrieved lyric records into the single annotated text blob
//! submitted to the sentiment service.

use moodring_lyrics_client::LyricRecord;

/// Marker placed between songs in the combined text
const SONG_SEPARATOR: &str = "\n\n---\n\n";

/// Concatenate the records' lyric text in retrieval order
///
/// Songs are separated by a visible blank-line marker and the blob ends with
/// a newline. An empty record list yields the empty string; deciding whether
/// that is a failure is the pipeline's job, not this function's.
pub fn combine(records: &[LyricRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut combined = records
        .iter()
        .map(|record| record.lyrics.as_str())
        .collect::<Vec<_>>()
        .join(SONG_SEPARATOR);
    combined.push('\n');
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lyrics: &str) -> LyricRecord {
        LyricRecord {
            artist: "Artist".to_string(),
            title: "Title".to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn test_empty_records_yield_empty_string() {
        assert_eq!(combine(&[]), "");
    }

    #[test]
    fn test_single_record() {
        let records = vec![record("Shine bright like a diamond")];
        assert_eq!(combine(&records), "Shine bright like a diamond\n");
    }

    #[test]
    fn test_multiple_records_are_separated_and_ordered() {
        let records = vec![record("first song"), record("second song")];
        assert_eq!(combine(&records), "first song\n\n---\n\nsecond song\n");
    }

    #[test]
    fn test_order_follows_input() {
        let records = vec![record("b"), record("a"), record("c")];
        assert_eq!(combine(&records), "b\n\n---\n\na\n\n---\n\nc\n");
    }
}
