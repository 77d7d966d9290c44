//! Environment-variable configuration for the tally binary.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Knobs for one pipeline run, read from `TALLY_*` environment variables.
/// Unset variables fall back to defaults suitable for a local run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the generated corpus is written and read back from.
    pub file_path: PathBuf,
    /// Character budget per read-buffer fill.
    pub buffer_size: usize,
    /// Byte ceiling enforced before the read pass.
    pub max_file_size: u64,
    /// Corpus size in words.
    pub total_words: u64,
    /// Words requested from the generator per written part.
    pub words_per_part: u64,
    /// Location of the durable JSON aggregate.
    pub store_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            file_path: env_parsed("TALLY_FILE_PATH", PathBuf::from("tally_corpus.txt"))?,
            buffer_size: env_parsed("TALLY_BUFFER_SIZE", 1024)?,
            max_file_size: env_parsed("TALLY_MAX_FILE_SIZE", 10 * 1024 * 1024)?,
            total_words: env_parsed("TALLY_TOTAL_WORDS", 100_000)?,
            words_per_part: env_parsed("TALLY_WORDS_PER_PART", 1000)?,
            store_path: env_parsed("TALLY_STORE_PATH", PathBuf::from("tally_counts.json"))?,
        })
    }
}

fn env_parsed<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("cannot read {name}")),
    }
}
