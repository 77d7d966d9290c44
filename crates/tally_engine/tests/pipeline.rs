use std::fs;

use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;

use tally_core::word_counts;
use tally_engine::{
    run_pipeline, GuardError, MemoryStore, PipelineConfig, PipelineError, TextGenerator,
};

struct FixedGenerator;

impl TextGenerator for FixedGenerator {
    fn generate(&self, _word_count: usize) -> String {
        "word1 word2 word3".to_string()
    }
}

fn config(temp: &tempfile::TempDir, max_file_size: u64) -> PipelineConfig {
    PipelineConfig {
        file_path: temp.path().join("corpus.txt"),
        buffer_size: 8,
        max_file_size,
        total_words: 6,
        words_per_part: 3,
    }
}

#[tokio::test]
async fn pipeline_writes_gates_and_counts_the_corpus() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = config(&temp, 5000);
    let store = MemoryStore::new();

    let report = run_pipeline(&config, &FixedGenerator, &store, &CancellationToken::new())
        .await
        .unwrap();

    let content = fs::read_to_string(&config.file_path).unwrap();
    assert_eq!(content, "word1 word2 word3word1 word2 word3");
    assert_eq!(report.corpus_bytes, content.len() as u64);
    assert_eq!(report.file_size, content.len() as u64);
    assert!(report.pass.completed_all());

    // The aggregate equals a whole-file count, part fusion included:
    // "word3word1" is a real key because parts are joined without a space.
    let aggregate = store.snapshot();
    assert_eq!(aggregate, word_counts(&content));
    assert_eq!(aggregate.get("word3word1"), Some(&1));
}

#[tokio::test]
async fn oversized_corpus_stops_before_the_read_pass() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = config(&temp, 10);
    let store = MemoryStore::new();

    let result = run_pipeline(&config, &FixedGenerator, &store, &CancellationToken::new()).await;

    assert!(matches!(
        result,
        Err(PipelineError::Guard(GuardError::SizeExceeded { .. }))
    ));
    // The guard fires before any upsert.
    assert!(store.snapshot().is_empty());
}
