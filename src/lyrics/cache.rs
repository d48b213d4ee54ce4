//! Raw lyrics cache.
//!
//! One JSON file per artist holding the raw lyric texts exactly as the
//! provider returned them (a JSON array of strings, most popular first).
//! The file is the whole caching policy: if it exists it is used, otherwise
//! the provider is queried and the result written out.
//!
//! ```text
//! ┌─────────────────┐
//! │ fetch_or_load   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Cache file?     │───── Yes ─────▶ Load & Return
//! └────────┬────────┘
//!          │ No
//!          ▼
//! ┌─────────────────┐
//! │ Provider Fetch  │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Write JSON file │
//! └─────────────────┘
//! ```
//!
//! Any failure on either path surfaces as [`LyricsError::Unavailable`].

use crate::lyrics::providers::LyricsProvider;
use crate::lyrics::types::{LyricsError, ProviderResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File name of the cache for an artist: all whitespace removed, then
/// `_raw_lyrics.json` appended.
pub fn cache_file_name(artist: &str) -> String {
    let compact: String = artist.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}_raw_lyrics.json", compact)
}

/// Full cache path for an artist inside `cache_dir`.
pub fn cache_path(cache_dir: &Path, artist: &str) -> PathBuf {
    cache_dir.join(cache_file_name(artist))
}

/// Loads raw lyrics from a JSON file.
pub async fn load_raw_lyrics(path: &Path) -> ProviderResult {
    let contents = fs::read_to_string(path).await?;
    let lyrics: Vec<String> = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), songs = lyrics.len(), "Loaded raw lyrics");
    Ok(lyrics)
}

/// Saves raw lyrics to a JSON file.
///
/// Creates parent directories if they don't exist.
pub async fn save_raw_lyrics(lyrics: &[String], path: &Path) -> Result<(), LyricsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(lyrics)?;
    let mut file = fs::File::create(path).await?;
    file.write_all(json.as_bytes()).await?;
    file.flush().await?;
    tracing::debug!(path = %path.display(), songs = lyrics.len(), "Saved raw lyrics");
    Ok(())
}

/// Returns the cached lyrics for `artist` or fetches and caches them.
///
/// This is the single error boundary of the pipeline: whatever goes wrong
/// (unreadable cache, network, auth, bad response) is logged and reported as
/// one generic [`LyricsError::Unavailable`].
pub async fn fetch_or_load<P: LyricsProvider>(
    provider: &P,
    cache_dir: &Path,
    artist: &str,
    max_count: usize,
) -> ProviderResult {
    let path = cache_path(cache_dir, artist);
    match fetch_or_load_inner(provider, &path, artist, max_count).await {
        Ok(lyrics) => Ok(lyrics),
        Err(e) => {
            tracing::error!(
                artist = %artist,
                path = %path.display(),
                error = %e,
                "Could not obtain lyrics"
            );
            Err(LyricsError::Unavailable {
                path,
                source: Box::new(e),
            })
        }
    }
}

async fn fetch_or_load_inner<P: LyricsProvider>(
    provider: &P,
    path: &Path,
    artist: &str,
    max_count: usize,
) -> ProviderResult {
    if fs::try_exists(path).await? {
        tracing::info!(path = %path.display(), "Using cached raw lyrics");
        return load_raw_lyrics(path).await;
    }

    tracing::info!(
        artist = %artist,
        max_count,
        path = %path.display(),
        "Cache file not found, querying lyrics provider"
    );
    let lyrics = provider.top_lyrics(artist, max_count).await?;
    save_raw_lyrics(&lyrics, path).await?;
    Ok(lyrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeProvider {
        lyrics: Option<Vec<String>>,
        calls: Cell<usize>,
    }

    impl FakeProvider {
        fn returning(lyrics: &[&str]) -> Self {
            Self {
                lyrics: Some(lyrics.iter().map(|s| s.to_string()).collect()),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self { lyrics: None, calls: Cell::new(0) }
        }
    }

    impl LyricsProvider for FakeProvider {
        async fn top_lyrics(&self, _artist: &str, max_count: usize) -> ProviderResult {
            self.calls.set(self.calls.get() + 1);
            match &self.lyrics {
                Some(l) => Ok(l.iter().take(max_count).cloned().collect()),
                None => Err(LyricsError::Api("HTTP 401 Unauthorized".to_string())),
            }
        }
    }

    #[test]
    fn file_name_drops_all_whitespace() {
        assert_eq!(cache_file_name("Iron Maiden"), "IronMaiden_raw_lyrics.json");
        assert_eq!(cache_file_name(" Els\tPets \n"), "ElsPets_raw_lyrics.json");
    }

    #[tokio::test]
    async fn existing_cache_is_used_without_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = cache_path(dir.path(), "Els Pets");
        std::fs::write(&path, r#"["Bonica 3Embed bonica"]"#).unwrap();

        let provider = FakeProvider::failing();
        let lyrics = fetch_or_load(&provider, dir.path(), "Els Pets", 5).await.unwrap();
        assert_eq!(lyrics, vec!["Bonica 3Embed bonica".to_string()]);
        assert_eq!(provider.calls.get(), 0);
    }

    #[tokio::test]
    async fn miss_fetches_and_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FakeProvider::returning(&["one 1Embed one", "two 2Embed two", "three"]);

        let lyrics = fetch_or_load(&provider, dir.path(), "Iron Maiden", 2).await.unwrap();
        assert_eq!(lyrics.len(), 2);
        assert_eq!(provider.calls.get(), 1);

        let path = dir.path().join("IronMaiden_raw_lyrics.json");
        let stored = load_raw_lyrics(&path).await.unwrap();
        assert_eq!(stored, lyrics);

        // second run is served from disk
        let again = fetch_or_load(&provider, dir.path(), "Iron Maiden", 2).await.unwrap();
        assert_eq!(again, lyrics);
        assert_eq!(provider.calls.get(), 1);
    }

    #[tokio::test]
    async fn miss_with_failing_provider_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FakeProvider::failing();

        let err = fetch_or_load(&provider, dir.path(), "Nobody", 5).await.unwrap_err();
        match err {
            LyricsError::Unavailable { path, source } => {
                assert_eq!(path, dir.path().join("Nobody_raw_lyrics.json"));
                assert!(matches!(*source, LyricsError::Api(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("Nobody_raw_lyrics.json").exists());
    }

    #[tokio::test]
    async fn corrupt_cache_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(cache_path(dir.path(), "Broken"), "{not json").unwrap();

        let err = fetch_or_load(&FakeProvider::failing(), dir.path(), "Broken", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, LyricsError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/cache/X_raw_lyrics.json");
        save_raw_lyrics(&["a".to_string()], &path).await.unwrap();
        assert_eq!(load_raw_lyrics(&path).await.unwrap(), vec!["a".to_string()]);
    }
}
