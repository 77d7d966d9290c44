use std::sync::Once;

use pretty_assertions::assert_eq;
use tally_core::{split_at_last_space, SplitOutcome};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

/// Feeds `text` through the split step in `fill`-sized character chunks the
/// way the streaming reader does, returning every emitted segment plus the
/// final leftover.
fn run_pass(text: &str, fill: usize) -> (Vec<String>, String) {
    assert!(fill > 0);
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut leftover = String::new();

    for chunk in chars.chunks(fill) {
        let window = format!("{leftover}{}", chunk.iter().collect::<String>());
        match split_at_last_space(&window) {
            SplitOutcome::Complete {
                segment,
                leftover: rest,
            } => {
                segments.push(segment.to_string());
                leftover = rest.to_string();
            }
            SplitOutcome::NoBoundary { leftover: all } => {
                leftover = all.to_string();
            }
        }
    }
    (segments, leftover)
}

/// Rejoins segments and leftover with the spaces the split consumed.
fn reconstruct(segments: &[String], leftover: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        out.push_str(segment);
        out.push(' ');
    }
    out.push_str(leftover);
    out
}

#[test]
fn segments_plus_leftover_reproduce_the_input() {
    init_logging();
    let text = "the quick brown fox jumps over the lazy dog";
    for fill in 1..=text.len() + 1 {
        let (segments, leftover) = run_pass(text, fill);
        assert_eq!(
            reconstruct(&segments, &leftover),
            text,
            "lost or duplicated text at fill size {fill}"
        );
    }
}

#[test]
fn word_longer_than_buffer_survives_intact() {
    let word = "incomprehensibilities";
    let (segments, leftover) = run_pass(word, 4);
    assert!(segments.is_empty());
    assert_eq!(leftover, word);
}

#[test]
fn large_buffer_emits_everything_before_final_word() {
    let text = "alpha beta gamma";
    let (segments, leftover) = run_pass(text, text.len());
    assert_eq!(segments, vec!["alpha beta".to_string()]);
    assert_eq!(leftover, "gamma");
}

#[test]
fn empty_input_emits_nothing() {
    let (segments, leftover) = run_pass("", 8);
    assert!(segments.is_empty());
    assert!(leftover.is_empty());
}

#[test]
fn multibyte_text_splits_on_character_boundaries() {
    let text = "ёлка под снегом стоит";
    for fill in 1..=8 {
        let (segments, leftover) = run_pass(text, fill);
        assert_eq!(reconstruct(&segments, &leftover), text);
    }
}
