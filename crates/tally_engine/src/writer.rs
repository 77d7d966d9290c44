use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use tally_logging::tally_info;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of corpus text for the writer.
pub trait TextGenerator: Send + Sync {
    /// Returns exactly `word_count` space-joined words, with no leading or
    /// trailing separator.
    fn generate(&self, word_count: usize) -> String;
}

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "commodo",
    "consequat", "duis", "aute", "irure", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur",
];

/// Deterministic lorem-ipsum generator: cycles a fixed word list.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoremGenerator;

impl TextGenerator for LoremGenerator {
    fn generate(&self, word_count: usize) -> String {
        LOREM
            .iter()
            .cycle()
            .take(word_count)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Creates (or truncates) the file at `path` and fills it with
/// `total_words` generated words, written in parts of at most
/// `words_per_part` words each. Returns the number of bytes written.
///
/// Parts are appended back to back with NO separator between them, so the
/// last word of one part fuses with the first word of the next. Counts in
/// existing aggregates were produced under this behavior; do not insert a
/// separator.
pub fn write_corpus(
    path: &Path,
    total_words: u64,
    words_per_part: u64,
    generator: &dyn TextGenerator,
) -> Result<u64, WriteError> {
    if total_words == 0 {
        return Err(WriteError::InvalidConfig("total word count must be positive"));
    }
    if words_per_part == 0 {
        return Err(WriteError::InvalidConfig("words per part must be positive"));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let total_parts = total_words.div_ceil(words_per_part);
    let mut bytes_written = 0u64;

    for part in 0..total_parts {
        let remaining = total_words - part * words_per_part;
        let words_in_part = remaining.min(words_per_part);

        let text = generator.generate(words_in_part as usize);
        writer.write_all(text.as_bytes())?;
        bytes_written += text.len() as u64;

        tally_info!(
            "part {}/{} written with {} words",
            part + 1,
            total_parts,
            words_in_part
        );
    }

    writer.flush()?;
    Ok(bytes_written)
}
