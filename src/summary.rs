//! Frequency-based extractive summarisation.
//!
//! Sentences are scored by the summed document frequency of their words and
//! the best ones are returned verbatim, in the order they appear in the text.

use crate::frequency::{FrequencyTable, SUMMARY_MIN_LEN};
use crate::text::{segment, tokenize};

/// Number of sentences kept when no count is configured
pub const DEFAULT_SUMMARY_SENTENCES: usize = 6;

/// Returned when no sentence survives segmentation
pub const NO_SENTENCES_MESSAGE: &str =
    "Could not extract enough text to summarise. Try a different file or a clearer PDF.";

/// Returned when no word qualifies for scoring
pub const TOO_LIMITED_MESSAGE: &str = "Text was extracted, but it was too limited to summarise.";

/// A candidate sentence during selection
#[derive(Debug, Clone)]
struct ScoredSentence<'a> {
    score: usize,
    index: usize,
    text: &'a str,
}

/// Summarise clean text into at most `target_count` sentences.
///
/// Ties on score go to the sentence that appears first. Degenerate input
/// yields [`NO_SENTENCES_MESSAGE`] or [`TOO_LIMITED_MESSAGE`] instead of an
/// error.
pub fn summarize(clean_text: &str, target_count: usize) -> String {
    let sentences = segment(clean_text);
    if sentences.is_empty() {
        return NO_SENTENCES_MESSAGE.to_string();
    }

    let freq = FrequencyTable::build(tokenize(clean_text), SUMMARY_MIN_LEN);
    if freq.is_empty() {
        return TOO_LIMITED_MESSAGE.to_string();
    }

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            score: tokenize(text).iter().map(|t| freq.get(t)).sum(),
            index,
            text: text.as_str(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    scored.truncate(target_count.min(sentences.len()));
    scored.sort_by_key(|s| s.index);

    tracing::debug!(
        sentences = sentences.len(),
        selected = scored.len(),
        vocabulary = freq.len(),
        "scored summary sentences"
    );

    let selected: Vec<&str> = scored.iter().map(|s| s.text).collect();
    selected.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    const FOX: &str = "The quick brown fox jumps over the lazy dog. \
                       The dog barked loudly at the fox near the river. \
                       Foxes are clever animals known for agility.";

    #[test]
    fn picks_highest_scoring_sentences_in_document_order() {
        assert_eq!(
            summarize(FOX, 2),
            "The quick brown fox jumps over the lazy dog. \
             The dog barked loudly at the fox near the river."
        );
    }

    #[test]
    fn restores_document_order_after_ranking() {
        let text = "Rivers flow through valleys and plains slowly. \
                    Rust compilers check rust ownership rules for rust code. \
                    Rust programs avoid data races in rust threads.";
        // the second and third sentences outscore the first
        assert_eq!(
            summarize(text, 2),
            "Rust compilers check rust ownership rules for rust code. \
             Rust programs avoid data races in rust threads."
        );
    }

    #[test]
    fn reorders_when_later_sentence_scores_higher() {
        let text = "Weather today is mild and calm outside here. \
                    Rust rust rust rust ownership rust borrow rust.";
        assert_eq!(summarize(text, 2), text);
    }

    #[test]
    fn skipped_sentence_does_not_break_document_order() {
        let text = "Gardens need water and sunlight every single day. \
                    Quiet mornings are pleasant for reading books outside. \
                    Water gardens water gardens water gardens with water daily.";
        // ranked: third, first, second
        assert_eq!(
            summarize(text, 2),
            "Gardens need water and sunlight every single day. \
             Water gardens water gardens water gardens with water daily."
        );
    }

    #[test]
    fn never_exceeds_target_count() {
        let summary = summarize(FOX, 1);
        assert_eq!(summary, "The quick brown fox jumps over the lazy dog.");
        assert_eq!(summarize(FOX, 10), normalize(FOX));
    }

    #[test]
    fn equal_scores_prefer_earlier_sentences() {
        let text = "Alpha beta gamma delta epsilon zeta eta. \
                    Theta iota kappa lambda omicron sigma tau.";
        assert_eq!(summarize(text, 1), "Alpha beta gamma delta epsilon zeta eta.");
    }

    #[test]
    fn zero_target_yields_empty_summary() {
        assert_eq!(summarize(FOX, 0), "");
    }

    #[test]
    fn short_text_falls_back() {
        assert_eq!(summarize("Too short. Tiny!", DEFAULT_SUMMARY_SENTENCES), NO_SENTENCES_MESSAGE);
        assert_eq!(summarize("", DEFAULT_SUMMARY_SENTENCES), NO_SENTENCES_MESSAGE);
    }

    #[test]
    fn stopword_text_is_too_limited() {
        let text = "It is as it is and that is that, or it was then.";
        assert_eq!(summarize(text, DEFAULT_SUMMARY_SENTENCES), TOO_LIMITED_MESSAGE);
    }
}
