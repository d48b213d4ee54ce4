pub mod genius;

pub use genius::GeniusProvider;

use crate::lyrics::types::ProviderResult;

/// A remote source of raw lyric texts for an artist.
#[allow(async_fn_in_trait)]
pub trait LyricsProvider {
    /// Up to `max_count` raw lyrics, most popular first.
    async fn top_lyrics(&self, artist: &str, max_count: usize) -> ProviderResult;
}
