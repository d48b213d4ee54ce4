// lyrics/mod.rs - top-level lyrics module re-exporting submodules
pub mod cache;
pub mod parse;
pub mod providers;
pub mod types;

pub use cache::fetch_or_load;
pub use providers::GeniusProvider;
pub use types::LyricsError;
