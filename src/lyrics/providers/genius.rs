use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::future::Future;

use crate::lyrics::parse::{extract_lyrics_from_html, is_non_song_title, remove_section_headers};
use crate::lyrics::providers::LyricsProvider;
use crate::lyrics::types::{LyricsError, ProviderResult, http_client};

const API_BASE: &str = "https://api.genius.com";

/// Songs requested per page of an artist's catalogue (API maximum).
const SONGS_PER_PAGE: usize = 50;

#[derive(Deserialize)]
struct ApiEnvelope<T> {
    response: T,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "type")]
    kind: String,
    result: SearchResult,
}

#[derive(Deserialize)]
struct SearchResult {
    primary_artist: Option<ArtistRef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ArtistRef {
    id: u64,
    name: String,
}

#[derive(Clone, Deserialize)]
struct SongsPage {
    songs: Vec<SongSummary>,
    next_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct SongSummary {
    title: String,
    url: String,
    #[serde(default)]
    lyrics_state: Option<String>,
    primary_artist: ArtistRef,
}

/// Genius lyrics provider.
///
/// Resolves the artist through the search endpoint, walks the artist's songs
/// in popularity order and scrapes each song page for its lyrics. Section
/// headers are removed and non-song pages (tracklists, credits...) skipped.
pub struct GeniusProvider {
    token: Option<String>,
}

impl GeniusProvider {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn token(&self) -> Result<&str, LyricsError> {
        match self.token.as_deref() {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(LyricsError::Api(
                "genius: missing access token (set GENIUS_ACCESS_TOKEN or pass --token)".to_string(),
            )),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, url: &str) -> Result<T, LyricsError> {
        let resp = http_client().get(url).bearer_auth(token).send().await?;
        if !resp.status().is_success() {
            return Err(LyricsError::Api(format!("genius: HTTP {}", resp.status())));
        }
        let envelope: ApiEnvelope<T> = resp.json().await?;
        Ok(envelope.response)
    }

    async fn search_artist(&self, token: &str, artist: &str) -> Result<ArtistRef, LyricsError> {
        let url = format!("{}/search?q={}", API_BASE, urlencoding::encode(artist));
        let search: SearchResponse = self.get_json(token, &url).await?;
        pick_artist(&search.hits, artist)
            .ok_or_else(|| LyricsError::Api(format!("genius: no artist found for '{}'", artist)))
    }

    async fn artist_songs(&self, token: &str, artist_id: u64, page: u32) -> Result<SongsPage, LyricsError> {
        let url = format!(
            "{}/artists/{}/songs?sort=popularity&per_page={}&page={}",
            API_BASE, artist_id, SONGS_PER_PAGE, page
        );
        self.get_json(token, &url).await
    }

    async fn song_lyrics(&self, url: &str) -> Result<Option<String>, LyricsError> {
        let html = http_client().get(url).send().await?.error_for_status()?.text().await?;
        Ok(extract_lyrics_from_html(&html)
            .map(|raw| remove_section_headers(&raw))
            .filter(|text| !text.trim().is_empty()))
    }
}

impl LyricsProvider for GeniusProvider {
    async fn top_lyrics(&self, artist: &str, max_count: usize) -> ProviderResult {
        let token = self.token()?;
        if max_count == 0 {
            return Ok(Vec::new());
        }

        let found = self.search_artist(token, artist).await?;
        tracing::info!(artist = %found.name, id = found.id, "Resolved artist on Genius");

        let lyrics = collect_lyrics(
            max_count,
            found.id,
            |page| self.artist_songs(token, found.id, page),
            |url| async move { self.song_lyrics(&url).await },
        )
        .await?;

        tracing::info!(artist = %found.name, songs = lyrics.len(), "Fetched lyrics from Genius");
        Ok(lyrics)
    }
}

/// Walk the artist's song pages from page 1, following `next_page`, until
/// `max_count` lyrics are collected or the pages run out. Songs whose page
/// has no lyrics are skipped.
async fn collect_lyrics<P, PF, L, LF>(
    max_count: usize,
    artist_id: u64,
    mut fetch_page: P,
    mut fetch_lyrics: L,
) -> ProviderResult
where
    P: FnMut(u32) -> PF,
    PF: Future<Output = Result<SongsPage, LyricsError>>,
    L: FnMut(String) -> LF,
    LF: Future<Output = Result<Option<String>, LyricsError>>,
{
    let mut lyrics = Vec::with_capacity(max_count);
    let mut page = Some(1);
    while let Some(n) = page {
        if lyrics.len() >= max_count {
            break;
        }
        let songs_page = fetch_page(n).await?;
        for song in lyric_candidates(&songs_page.songs, artist_id) {
            if lyrics.len() >= max_count {
                break;
            }
            match fetch_lyrics(song.url.clone()).await? {
                Some(text) => {
                    tracing::debug!(title = %song.title, "Fetched lyrics");
                    lyrics.push(text);
                }
                None => tracing::warn!(title = %song.title, "No lyrics on song page, skipping"),
            }
        }
        page = songs_page.next_page;
    }
    Ok(lyrics)
}

/// Prefer a hit whose primary artist is named exactly like the query,
/// otherwise take the primary artist of the first song hit.
fn pick_artist(hits: &[SearchHit], query: &str) -> Option<ArtistRef> {
    let query = query.trim().to_lowercase();
    let artists = || {
        hits.iter()
            .filter(|h| h.kind == "song")
            .filter_map(|h| h.result.primary_artist.as_ref())
    };
    artists()
        .find(|a| a.name.trim().to_lowercase() == query)
        .or_else(|| artists().next())
        .cloned()
}

/// Songs by the artist itself, with complete lyrics, that are not
/// tracklists, credits and similar pages.
fn lyric_candidates(songs: &[SongSummary], artist_id: u64) -> impl Iterator<Item = &SongSummary> {
    songs.iter().filter(move |s| {
        s.primary_artist.id == artist_id
            && s.lyrics_state.as_deref().is_none_or(|state| state == "complete")
            && !is_non_song_title(&s.title)
    })
}
