// src/text_utils.rs
// Lyrics cleaning: strip the provider's duplicated text and normalize whitespace

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything from the start of a lyric up to and including the first embed
/// counter (`17Embed`, `8Embed`, `Embed`). The lyric page repeats the text
/// after that marker.
static EMBED_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^.*?\d{0,3}Embed").unwrap());

// Unicode White_Space plus the information separators U+001C..U+001F
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]{2,}").unwrap());

/// Clean one raw lyric: cut through the first embed marker, turn every
/// whitespace character into a space and lowercase.
///
/// Without a marker nothing is cut. Runs of spaces are left for
/// [`collapse_whitespace`].
pub fn clean_lyric(raw: &str) -> String {
    let cut = EMBED_PREFIX_RE.replace(raw, "");
    WHITESPACE_RE.replace_all(&cut, " ").to_lowercase()
}

/// Replace each run of two or more whitespace characters with one space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(text, " ").into_owned()
}

/// Clean every lyric and join them into a single corpus string.
///
/// Songs are concatenated without a separator, whitespace runs collapsed and
/// the ends trimmed. Song boundaries are not recoverable from the result.
pub fn normalize_lyrics<S: AsRef<str>>(lyrics: &[S]) -> String {
    let mut all = String::new();
    for lyric in lyrics {
        all.push_str(&clean_lyric(lyric.as_ref()));
    }
    collapse_whitespace(&all).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_first_copy_through_marker() {
        assert_eq!(normalize_lyrics(&["ABC17Embed Hello   World"]), "hello world");
    }

    #[test]
    fn no_marker_keeps_text() {
        assert_eq!(normalize_lyrics(&["no marker here"]), "no marker here");
        assert_eq!(normalize_lyrics(&["No\tMarker\n\nHere"]), "no marker here");
    }

    #[test]
    fn songs_concatenate_without_separator() {
        assert_eq!(normalize_lyrics(&["A5Embed X", "B2Embed Y"]), "x y");
        // nothing is inserted between songs when no whitespace survives
        assert_eq!(normalize_lyrics(&["A5EmbedX", "B2EmbedY"]), "xy");
    }

    #[test]
    fn marker_without_digits() {
        let raw = "És bonica i és tot el que tinc Embed\nPotser és massa aviat";
        assert_eq!(normalize_lyrics(&[raw]), "potser és massa aviat");
    }

    #[test]
    fn only_first_marker_is_the_cut_point() {
        let raw = "first copy 17Embed\nsecond 3Embed tail";
        assert_eq!(normalize_lyrics(&[raw]), "second 3embed tail");
    }

    #[test]
    fn cut_spans_newlines() {
        let raw = "I have the power\nto make my evil take its course17Embed\nWoe to you, o'er Earth and Sea";
        let out = normalize_lyrics(&[raw]);
        assert_eq!(out, "woe to you, o'er earth and sea");
        assert!(!out.contains("power"));
    }

    #[test]
    fn long_counter_is_cut_entirely() {
        // extra leading digits belong to the lazy prefix
        assert_eq!(normalize_lyrics(&["x1234Embed y"]), "y");
    }

    #[test]
    fn clean_lyric_keeps_space_runs() {
        assert_eq!(clean_lyric("A1Embed\n\nFly  To Live"), "  fly  to live");
    }

    #[test]
    fn punctuation_and_diacritics_pass_through() {
        assert_eq!(normalize_lyrics(&["L'ÀNIMA, d'ENÇÀ!"]), "l'ànima, d'ençà!");
    }

    #[test]
    fn information_separators_count_as_whitespace() {
        assert_eq!(normalize_lyrics(&["A1Embed x\u{1c}\u{1d}y"]), "x y");
        assert_eq!(clean_lyric("A1Embed a\u{1f}b"), " a b");
        assert_eq!(collapse_whitespace("a \u{1e}b"), "a b");
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = collapse_whitespace(" a  \t b\n\n\nc ");
        assert_eq!(once, " a b c ");
        assert_eq!(collapse_whitespace(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_lyrics::<&str>(&[]), "");
        assert_eq!(normalize_lyrics(&["", "5Embed"]), "");
    }
}
