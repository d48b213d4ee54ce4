use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Titles of pages the provider files under an artist that are not songs.
static NON_SONG_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)track\s?list|album art(work)?|liner notes|booklet|credits|interview|skit|instrumental|setlist",
    )
    .unwrap()
});

static LYRICS_ROOT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[class^="Lyrics__Root"]"#).unwrap());

static LYRICS_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[data-lyrics-container="true"]"#).unwrap());

/// Extract the lyric text from a song page.
///
/// Prefers the page's lyrics root (which also carries the embed counter the
/// normalizer keys on) and falls back to the individual lyric containers.
/// Returns `None` when the page has no lyrics markup at all.
pub fn extract_lyrics_from_html(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let mut out = String::new();
    let mut found = false;
    for root in doc.select(&LYRICS_ROOT) {
        found = true;
        collect_text(root, &mut out);
        out.push('\n');
    }
    if !found {
        for container in doc.select(&LYRICS_CONTAINER) {
            found = true;
            collect_text(container, &mut out);
            out.push('\n');
        }
    }

    if found { Some(out.trim_end().to_string()) } else { None }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) if el.attr("data-exclude-from-selection") == Some("true") => {}
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, out);
                }
            }
            _ => {}
        }
    }
}

/// Drop `[Chorus]`-style section headers and the blank lines they leave.
pub fn remove_section_headers(lyrics: &str) -> String {
    let stripped = SECTION_HEADER_RE.replace_all(lyrics, "");
    BLANK_LINES_RE
        .replace_all(&stripped, "\n")
        .trim_matches('\n')
        .to_string()
}

/// True when a title names a tracklist, artwork, credits page and the like.
pub fn is_non_song_title(title: &str) -> bool {
    NON_SONG_TITLE_RE.is_match(title)
}
