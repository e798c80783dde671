//! Text cleaning, sentence segmentation and tokenisation.
//!
//! Everything here is a pure function over `&str`. The compiled patterns are
//! process-wide statics and safe to share between threads.

use lazy_static::lazy_static;
use regex::Regex;

/// Fragments shorter than this (in characters) are not treated as sentences
pub const MIN_SENTENCE_CHARS: usize = 25;

lazy_static! {
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\n{2,}").unwrap();
    static ref BLANK_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    // information separators count as whitespace too
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?][\s\x1C-\x1F]+").unwrap();
    static ref WORD: Regex = Regex::new(r"[a-z0-9']+").unwrap();
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Normalise whitespace in raw extracted text.
///
/// Carriage returns become newlines, repeated newlines collapse to one,
/// repeated spaces/tabs collapse to a single space and the result is trimmed.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('\r', "\n");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    let text = BLANK_RUNS.replace_all(&text, " ");
    text.trim_matches(is_space).to_string()
}

/// Split text into sentences of at least [`MIN_SENTENCE_CHARS`] characters.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. The punctuation
/// stays with its sentence and the whitespace is dropped. Order follows the
/// document.
pub fn segment(text: &str) -> Vec<String> {
    let flat = WHITESPACE_RUNS.replace_all(text, " ");
    let flat = flat.trim_matches(is_space);
    if flat.is_empty() {
        return Vec::new();
    }

    let mut fragments = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BREAK.find_iter(flat) {
        // terminal punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        fragments.push(&flat[start..end]);
        start = boundary.end();
    }
    fragments.push(&flat[start..]);

    fragments
        .into_iter()
        .map(|s| s.trim_matches(is_space))
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Lowercase word tokens: maximal runs of ASCII letters, digits or `'`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
