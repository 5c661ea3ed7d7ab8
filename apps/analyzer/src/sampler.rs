//! Random playlist sampling
//!
//! Caps the number of external lyric lookups per analysis by drawing a
//! bounded subset of songs uniformly at random, without replacement.

use moodring_lyrics_client::SongDescriptor;
use rand::Rng;

/// Sample up to `max` songs from `songs`, uniformly without replacement
///
/// The input is untouched; the result order is the random draw order, not
/// the original playlist order. An empty input yields an empty result (the
/// pipeline treats an empty playlist as a failure before ever calling the
/// sampler).
pub fn sample(songs: &[SongDescriptor], max: usize) -> Vec<SongDescriptor> {
    sample_with_rng(songs, max, &mut rand::thread_rng())
}

/// [`sample`] with an injected RNG, for deterministic tests
pub fn sample_with_rng<R: Rng>(
    songs: &[SongDescriptor],
    max: usize,
    rng: &mut R,
) -> Vec<SongDescriptor> {
    let mut pool = songs.to_vec();
    let mut sampled = Vec::with_capacity(max.min(pool.len()));

    while !pool.is_empty() && sampled.len() < max {
        let index = rng.gen_range(0..pool.len());
        sampled.push(pool.swap_remove(index));
    }

    sampled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song_list(count: usize) -> Vec<SongDescriptor> {
        (0..count)
            .map(|i| SongDescriptor::new(format!("Artist {}", i), format!("Title {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(sample(&[], 5).is_empty());
    }

    #[test]
    fn test_never_exceeds_max() {
        for len in 0..20 {
            let songs = song_list(len);
            let sampled = sample(&songs, 5);
            assert!(sampled.len() <= 5);
            assert!(sampled.len() <= songs.len());
        }
    }

    #[test]
    fn test_takes_everything_when_max_exceeds_len() {
        let songs = song_list(3);
        let sampled = sample(&songs, 5);
        assert_eq!(sampled.len(), 3);
    }

    #[test]
    fn test_no_duplicates() {
        let songs = song_list(10);
        for _ in 0..50 {
            let sampled = sample(&songs, 5);
            for (i, song) in sampled.iter().enumerate() {
                assert!(
                    !sampled[i + 1..].contains(song),
                    "duplicate song in sample: {:?}",
                    song
                );
            }
        }
    }

    #[test]
    fn test_sampled_songs_come_from_input() {
        let songs = song_list(10);
        let sampled = sample(&songs, 5);
        for song in &sampled {
            assert!(songs.contains(song));
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let songs = song_list(10);
        let before = songs.clone();
        let _ = sample(&songs, 5);
        assert_eq!(songs, before);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let songs = song_list(10);
        let first = sample_with_rng(&songs, 5, &mut StdRng::seed_from_u64(42));
        let second = sample_with_rng(&songs, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_max_yields_empty_output() {
        let songs = song_list(10);
        assert!(sample(&songs, 0).is_empty());
    }
}
