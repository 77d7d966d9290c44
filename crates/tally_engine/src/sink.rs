use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use tally_core::WordCountMap;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("batch rejected: {0}")]
    Rejected(String),
}

/// Destination for per-segment word counts.
///
/// One call is one transaction: for every submitted word the stored count is
/// incremented, or the word is inserted with its submitted count. Either the
/// whole batch applies or none of it does. The read pass never reads the
/// aggregate back; it only submits deltas.
#[async_trait]
pub trait UpsertSink: Send + Sync {
    async fn upsert(&self, counts: &WordCountMap) -> Result<(), SinkError>;
}

/// In-process aggregate, used by tests and as a baseline for store
/// implementations reachable over real clients.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: Mutex<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_of(&self, word: &str) -> u64 {
        self.words
            .lock()
            .map(|words| words.get(word).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.words.lock().map(|words| words.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UpsertSink for MemoryStore {
    async fn upsert(&self, counts: &WordCountMap) -> Result<(), SinkError> {
        let mut words = self
            .words
            .lock()
            .map_err(|_| SinkError::Rejected("aggregate mutex poisoned".into()))?;
        for (word, count) in counts {
            *words.entry(word.clone()).or_insert(0) += count;
        }
        Ok(())
    }
}
