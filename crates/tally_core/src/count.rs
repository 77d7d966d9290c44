use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Occurrence counts for one segment of text, keyed by exact (case-sensitive)
/// word value. Built fresh per segment and discarded after the upsert.
pub type WordCountMap = HashMap<String, u64>;

/// Shortest word that is counted, in characters.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word that is counted, in characters.
pub const MAX_WORD_LEN: usize = 20;

// Everything that is neither a word character (Unicode letters, digits,
// underscore) nor whitespace. Matches are deleted, not replaced, so
// "hello,world" fuses into one token while "hello, world" stays two.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Counts word occurrences in `text`.
///
/// Punctuation and symbols are stripped outright, the remainder is split on
/// single spaces, and tokens outside [`MIN_WORD_LEN`]..=[`MAX_WORD_LEN`]
/// characters are dropped. The length bounds are load-bearing: existing
/// persisted aggregates were built with them, so they must not change.
pub fn word_counts(text: &str) -> WordCountMap {
    let cleaned = NON_WORD.replace_all(text, "");

    let mut counts = WordCountMap::new();
    for token in cleaned.split(' ') {
        let len = token.chars().count();
        if len < MIN_WORD_LEN || len > MAX_WORD_LEN {
            continue;
        }
        *counts.entry(token.to_owned()).or_insert(0) += 1;
    }
    counts
}
