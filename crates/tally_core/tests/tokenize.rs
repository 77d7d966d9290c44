use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tally_core::word_counts;

fn expected(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    pairs.iter().map(|(w, n)| (w.to_string(), *n)).collect()
}

#[test]
fn counts_repeated_words() {
    let counts = word_counts("apple orange banana apple orange");
    assert_eq!(
        counts,
        expected(&[("apple", 2), ("orange", 2), ("banana", 1)])
    );
}

#[test]
fn punctuation_is_stripped_before_counting() {
    let counts = word_counts("hello, world! hello world.");
    assert_eq!(counts, expected(&[("hello", 2), ("world", 2)]));
}

#[test]
fn short_words_are_excluded() {
    // "is" is two characters and falls below the floor; "#" and "(" are
    // stripped entirely.
    let counts = word_counts("Csharp(#) is awesome.");
    assert_eq!(counts, expected(&[("Csharp", 1), ("awesome", 1)]));
}

#[test]
fn overlong_words_are_excluded() {
    let kept = "a".repeat(20);
    let dropped = "b".repeat(21);
    let counts = word_counts(&format!("{kept} {dropped}"));
    assert_eq!(counts, expected(&[(kept.as_str(), 1)]));
}

#[test]
fn empty_input_yields_empty_map() {
    assert!(word_counts("").is_empty());
}

#[test]
fn length_is_measured_in_characters_not_bytes() {
    // Three Cyrillic letters are six bytes but three characters, so the word
    // clears the minimum-length floor.
    let counts = word_counts("мир мир");
    assert_eq!(counts, expected(&[("мир", 2)]));
}

#[test]
fn adjacent_punctuation_fuses_tokens() {
    // No space is inserted where punctuation was removed.
    let counts = word_counts("hello,world again");
    assert_eq!(counts, expected(&[("helloworld", 1), ("again", 1)]));
}
