//! Word tokenization for cleaned lyrics.
//!
//! Text is split on Unicode word boundaries (UAX #29); segments without any
//! letter or digit (punctuation, whitespace, symbols) are dropped. Each
//! language then splits clitics off words the way a linguistic tokenizer
//! does: English contractions (`do` + `n't`), Catalan elisions (`l'` +
//! `home`), weak pronouns (`se` + `'n`) and hyphenated enclitics (`dona` +
//! `-li`).

use clap::ValueEnum;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Language of the lyrics corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ca,
}

impl Language {
    /// Two-letter code, used for titles and file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ca => "ca",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const EN_CLITICS: [&str; 6] = ["s", "re", "ve", "ll", "d", "m"];

const CA_ELIDED: [&str; 7] = ["l", "d", "s", "n", "m", "t", "qu"];

const CA_WEAK_PRONOUNS: [&str; 9] = ["n", "l", "ls", "m", "t", "s", "ns", "hi", "ho"];

/// Pronouns attached to a verb with a hyphen (`dona-li`, `anar-se'n`).
const CA_ENCLITICS: [&str; 21] = [
    "me", "te", "se", "nos", "vos", "us", "lo", "la", "los", "les", "li", "ne", "hi", "ho", "m",
    "t", "s", "n", "l", "ls", "ns",
];

/// Split `text` into word tokens for `lang`.
pub fn tokenize(text: &str, lang: Language) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut prev_was_word = false;
    let mut hyphen_after_word = false;

    for segment in text.split_word_bounds() {
        if !segment.chars().any(char::is_alphanumeric) {
            hyphen_after_word = prev_was_word && segment == "-";
            prev_was_word = false;
            continue;
        }
        match lang {
            Language::En => split_english(segment, &mut tokens),
            Language::Ca => {
                let first = tokens.len();
                split_catalan(segment, &mut tokens);
                let pronoun = tokens[first].trim_end_matches(is_apostrophe).to_lowercase();
                if hyphen_after_word && CA_ENCLITICS.contains(&pronoun.as_str()) {
                    tokens[first].insert(0, '-');
                }
            }
        }
        prev_was_word = true;
        hyphen_after_word = false;
    }
    tokens
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Split `word` at the apostrophe at byte `idx`: (before, apostrophe + after, after).
fn split_at_apostrophe(word: &str, idx: usize) -> (&str, &str, &str) {
    let (head, tail) = word.split_at(idx);
    let apostrophe_len = tail.chars().next().map_or(0, char::len_utf8);
    (head, tail, &tail[apostrophe_len..])
}

fn split_english(word: &str, out: &mut Vec<String>) {
    let Some(idx) = word.rfind(is_apostrophe) else {
        out.push(word.to_string());
        return;
    };
    let (head, tail, rest) = split_at_apostrophe(word, idx);
    let rest_lower = rest.to_lowercase();

    if rest_lower == "t" && head.len() > 1 && head.ends_with(['n', 'N']) {
        let (stem, n) = head.split_at(head.len() - 1);
        out.push(stem.to_string());
        out.push(format!("{}{}", n, tail));
    } else if !head.is_empty() && EN_CLITICS.contains(&rest_lower.as_str()) {
        out.push(head.to_string());
        out.push(tail.to_string());
    } else {
        out.push(word.to_string());
    }
}

fn split_catalan(word: &str, out: &mut Vec<String>) {
    let mut word = word;

    if let Some(idx) = word.find(is_apostrophe) {
        let (head, tail, rest) = split_at_apostrophe(word, idx);
        if !rest.is_empty() && CA_ELIDED.contains(&head.to_lowercase().as_str()) {
            let apostrophe_len = tail.len() - rest.len();
            out.push(word[..idx + apostrophe_len].to_string());
            word = rest;
        }
    }

    if let Some(idx) = word.rfind(is_apostrophe) {
        let (head, tail, rest) = split_at_apostrophe(word, idx);
        if !head.is_empty() && CA_WEAK_PRONOUNS.contains(&rest.to_lowercase().as_str()) {
            out.push(head.to_string());
            out.push(tail.to_string());
            return;
        }
    }

    out.push(word.to_string());
}
