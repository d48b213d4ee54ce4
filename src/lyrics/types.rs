use once_cell::sync::Lazy;
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;

// Shared HTTP client with reasonable defaults for timeouts
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("lyricstats/0.1")
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
});

/// Provider result: raw lyric texts, most popular first
pub type ProviderResult = Result<Vec<String>, LyricsError>;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The only error surfaced by the fetch boundary: no usable cache file
    /// and the provider failed for whatever reason.
    #[error(
        "Cannot continue. No usable JSON file with raw lyrics at {} and the lyrics provider returned an error. \
         No lyrics to process. Download the JSON file and try again.",
        .path.display()
    )]
    Unavailable {
        path: PathBuf,
        #[source]
        source: Box<LyricsError>,
    },
}

// Re-export HTTP client for providers within the lyrics module
pub(crate) fn http_client() -> &'static Client {
    &HTTP_CLIENT
}
