//! Word frequency counting over tokens.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Minimum token length (exclusive) used when scoring summary sentences
pub const SUMMARY_MIN_LEN: usize = 2;

/// Minimum token length (exclusive) used when picking question terms
pub const QUESTION_MIN_LEN: usize = 3;

const STOPWORD_LIST: &str = "
a an and are as at be by for from has he in is it its of on or that the to was were will with you your
we they them this those these i my our us not can could should would may might about into than then
";

lazy_static! {
    /// Common English function words excluded from scoring (lowercase)
    pub static ref STOPWORDS: HashSet<&'static str> = STOPWORD_LIST.split_whitespace().collect();
}

/// Check a lowercase token against the stopword set
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Occurrence counts for qualifying tokens.
///
/// Tokens keep the order in which they were first seen, so rankings over
/// equal counts are reproducible.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyTable {
    /// Count tokens longer than `min_len` that are not stopwords
    pub fn build<I, S>(tokens: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            let token = token.as_ref();
            if token.len() <= min_len || is_stopword(token) {
                continue;
            }
            match table.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    table.counts.insert(token.to_string(), 1);
                    table.first_seen.push(token.to_string());
                }
            }
        }
        table
    }

    /// Count for a token, 0 when absent
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All tokens by descending count; equal counts keep first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .first_seen
            .iter()
            .map(|token| (token.as_str(), self.counts[token]))
            .collect();
        // stable sort
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `k` most frequent tokens
    pub fn top(&self, k: usize) -> Vec<&str> {
        self.ranked()
            .into_iter()
            .take(k)
            .map(|(token, _)| token)
            .collect()
    }
}
