mod lyrics;
mod stats;
mod text_utils;
mod tokenize;
mod ui;

use crate::lyrics::{GeniusProvider, LyricsError};
use crate::stats::build_table;
use crate::text_utils::normalize_lyrics;
use crate::tokenize::{Language, tokenize};
use clap::Parser;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the Genius API access token.
const TOKEN_ENV: &str = "GENIUS_ACCESS_TOKEN";

/// Application configuration from CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Artist or group whose lyrics are analysed
    artist: String,
    /// Maximum number of songs to fetch (most popular first)
    #[arg(long, default_value_t = 5)]
    max_songs: usize,
    /// Language of the lyrics, selects the tokenizer rules
    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,
    /// Directory holding the `<Artist>_raw_lyrics.json` cache files
    #[arg(long, default_value = ".")]
    cache_dir: PathBuf,
    /// Directory for the `<lang>_lyrics.txt` export
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Write the cleaned corpus to `<lang>_lyrics.txt`
    #[arg(long)]
    save_text: bool,
    /// Genius API access token.
    /// If empty, the GENIUS_ACCESS_TOKEN env var will be used as a fallback.
    #[arg(long)]
    token: Option<String>,
    /// Print the token table to stdout instead of showing the plot
    #[arg(long)]
    pipe: bool,
    /// Only print the first N rows of the table (pipe mode)
    #[arg(long, value_name = "N")]
    top: Option<usize>,
    /// Enable backend logging to stderr
    #[arg(long)]
    pub debug_log: bool,
}

fn token_from_env_if_empty(cfg: &mut Config, env_value: Option<String>) {
    let missing = cfg.token.as_deref().is_none_or(|t| t.trim().is_empty());
    if missing
        && let Some(t) = env_value.map(|t| t.trim().to_string())
        && !t.is_empty()
    {
        cfg.token = Some(t);
    }
}

fn init_logging(debug_log: bool) {
    let default_level = if debug_log { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Write the cleaned corpus to `<output_dir>/<lang>_lyrics.txt`.
async fn export_text(output_dir: &Path, lang: Language, text: &str) -> Result<PathBuf, LyricsError> {
    tokio::fs::create_dir_all(output_dir).await?;
    let path = output_dir.join(format!("{}_lyrics.txt", lang));
    tokio::fs::write(&path, text).await?;
    Ok(path)
}

async fn run(cfg: &Config) -> Result<(), Box<dyn Error + Send + Sync>> {
    let provider = GeniusProvider::new(cfg.token.clone());
    let raw = lyrics::fetch_or_load(&provider, &cfg.cache_dir, &cfg.artist, cfg.max_songs).await?;
    tracing::info!(artist = %cfg.artist, songs = raw.len(), "Raw lyrics ready");

    let cleaned = normalize_lyrics(&raw);
    tracing::debug!(chars = cleaned.chars().count(), "Cleaned lyrics");
    if cfg.save_text {
        let path = export_text(&cfg.output_dir, cfg.lang, &cleaned).await?;
        tracing::info!(path = %path.display(), "Saved cleaned lyrics");
    }

    let tokens = tokenize(&cleaned, cfg.lang);
    let table = build_table(&tokens);
    tracing::info!(
        lang = %cfg.lang,
        tokens = tokens.len(),
        distinct = table.len(),
        "Built token table"
    );

    if cfg.pipe {
        ui::pipe::print_table(&table, cfg.top)?;
    } else {
        ui::render_scatter(&table, cfg.lang.code())?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut cfg = Config::parse();
    token_from_env_if_empty(&mut cfg, std::env::var(TOKEN_ENV).ok());
    init_logging(cfg.debug_log);

    // Print error if any, for better diagnostics
    if let Err(e) = run(&cfg).await {
        eprintln!("Error: {}", e);
        return Err(e);
    }
    Ok(())
}
