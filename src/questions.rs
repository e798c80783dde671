//! Rule-based comprehension questions built from key terms.

use crate::frequency::{FrequencyTable, QUESTION_MIN_LEN};
use crate::text::tokenize;

/// Number of questions produced when no count is configured
pub const DEFAULT_MAX_QUESTIONS: usize = 6;

/// How many of the most frequent terms are considered
pub const KEY_TERM_CANDIDATES: usize = 10;

/// Question templates, cycled in order. `{term}` is replaced by a key term.
pub const TEMPLATES: [&str; 5] = [
    "Define: '{term}'.",
    "Explain the importance of '{term}' in the topic.",
    "Give one example of how '{term}' is used.",
    "What are the benefits or risks related to '{term}'?",
    "How does '{term}' impact users or systems?",
];

/// Generic questions used when the text yields no key terms
pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "Summarise the main idea of the document in your own words.",
    "List 3 key points from the document.",
    "What problem is being discussed and what solution is suggested?",
];

/// The most frequent qualifying terms, ties broken by first occurrence
pub fn key_terms(clean_text: &str) -> Vec<String> {
    let freq = FrequencyTable::build(tokenize(clean_text), QUESTION_MIN_LEN);
    freq.top(KEY_TERM_CANDIDATES)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Produce up to `max_questions` questions about the text's key terms.
///
/// The n-th term is paired with template `n % 5`. Text without any key term
/// gets [`FALLBACK_QUESTIONS`].
pub fn generate_questions(clean_text: &str, max_questions: usize) -> Vec<String> {
    let terms = key_terms(clean_text);
    if terms.is_empty() {
        return FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect();
    }

    let questions: Vec<String> = terms
        .iter()
        .zip(TEMPLATES.iter().cycle())
        .take(max_questions)
        .map(|(term, template)| template.replace("{term}", term))
        .collect();

    tracing::debug!(terms = terms.len(), questions = questions.len(), "generated questions");
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_repeated_term_uses_first_template() {
        let text = "the ".repeat(5) + &"photosynthesis and the ".repeat(12);
        assert_eq!(
            generate_questions(&text, DEFAULT_MAX_QUESTIONS),
            vec!["Define: 'photosynthesis'."]
        );
    }

    #[test]
    fn templates_cycle_in_rank_order() {
        let text = "memory memory memory memory memory memory \
                    thread thread thread thread thread \
                    mutex mutex mutex mutex \
                    channel channel channel \
                    future future \
                    tokio";
        let questions = generate_questions(text, 10);
        assert_eq!(
            questions,
            vec![
                "Define: 'memory'.",
                "Explain the importance of 'thread' in the topic.",
                "Give one example of how 'mutex' is used.",
                "What are the benefits or risks related to 'channel'?",
                "How does 'future' impact users or systems?",
                "Define: 'tokio'.",
            ]
        );
    }

    #[test]
    fn stops_at_max_questions() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        assert_eq!(generate_questions(text, 6).len(), 6);
        assert_eq!(generate_questions(text, 2).len(), 2);
        // only the ten most frequent terms are candidates
        assert_eq!(generate_questions(text, 20).len(), KEY_TERM_CANDIDATES);
    }

    #[test]
    fn equal_counts_keep_first_occurrence() {
        assert_eq!(
            key_terms("zinc copper zinc copper iron"),
            vec!["zinc", "copper", "iron"]
        );
    }

    #[test]
    fn falls_back_without_key_terms() {
        let questions = generate_questions("It is the way it was, and so it is.", DEFAULT_MAX_QUESTIONS);
        assert_eq!(questions, FALLBACK_QUESTIONS.to_vec());
        assert_eq!(generate_questions("", 0).len(), 3);
    }

    #[test]
    fn short_words_are_not_key_terms() {
        // three-letter words qualify for summaries but not for questions
        let questions = generate_questions("fox dog cat fox dog cat", DEFAULT_MAX_QUESTIONS);
        assert_eq!(questions, FALLBACK_QUESTIONS.to_vec());
    }
}
