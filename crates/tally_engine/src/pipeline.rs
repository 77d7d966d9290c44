use std::path::PathBuf;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use tally_logging::tally_info;

use crate::guard::{check_file_size, GuardError};
use crate::reader::ReadPass;
use crate::sink::UpsertSink;
use crate::types::{PassError, PassSummary};
use crate::writer::{write_corpus, TextGenerator, WriteError};

/// Knobs for one full pipeline run. How they were obtained (env, file,
/// flags) is the caller's business.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub file_path: PathBuf,
    /// Character budget per read-buffer fill, > 0.
    pub buffer_size: usize,
    /// Byte ceiling enforced by the size guard, > 0.
    pub max_file_size: u64,
    pub total_words: u64,
    pub words_per_part: u64,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Guard(#[from] GuardError),
    #[error(transparent)]
    Pass(#[from] PassError),
}

#[derive(Debug)]
pub struct PipelineReport {
    pub corpus_bytes: u64,
    pub file_size: u64,
    pub pass: PassSummary,
}

/// Composes the full run: write the corpus, gate it on size, then stream it
/// through tokenization into the sink, one segment at a time.
pub async fn run_pipeline(
    config: &PipelineConfig,
    generator: &dyn TextGenerator,
    sink: &dyn UpsertSink,
    cancel: &CancellationToken,
) -> Result<PipelineReport, PipelineError> {
    let corpus_bytes = write_corpus(
        &config.file_path,
        config.total_words,
        config.words_per_part,
        generator,
    )?;
    tally_info!(
        "corpus of {} words ({} bytes) written to {:?}",
        config.total_words,
        corpus_bytes,
        config.file_path
    );

    let file_size = check_file_size(&config.file_path, config.max_file_size)?;

    let pass = ReadPass::new(config.buffer_size)?;
    let summary = pass.run(&config.file_path, sink, cancel).await?;

    Ok(PipelineReport {
        corpus_bytes,
        file_size,
        pass: summary,
    })
}
