mod config;
mod logging;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use tally_engine::{
    run_pipeline, GuardError, JsonFileStore, LoremGenerator, PassOutcome, PipelineConfig,
    PipelineError,
};
use tally_logging::{tally_error, tally_info, tally_warn};

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let app_config = config::AppConfig::from_env()?;
    let pipeline_config = PipelineConfig {
        file_path: app_config.file_path.clone(),
        buffer_size: app_config.buffer_size,
        max_file_size: app_config.max_file_size,
        total_words: app_config.total_words,
        words_per_part: app_config.words_per_part,
    };

    let store = JsonFileStore::new(app_config.store_path.clone());
    let cancel = CancellationToken::new();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run_pipeline(
        &pipeline_config,
        &LoremGenerator,
        &store,
        &cancel,
    ));

    match result {
        Ok(report) => {
            match &report.pass.outcome {
                PassOutcome::CompletedAll => {
                    tally_info!(
                        "pass complete: {} segments committed to {:?}",
                        report.pass.segments,
                        store.path()
                    );
                }
                PassOutcome::StoppedEarly { cause } => {
                    // Commits made before the stop are kept; the remainder of
                    // the file was not processed in this run.
                    tally_warn!(
                        "pass stopped early after {} segments: {}",
                        report.pass.segments,
                        cause
                    );
                }
            }
            Ok(())
        }
        Err(PipelineError::Guard(GuardError::SizeExceeded { actual, max })) => {
            tally_error!("corpus of {actual} bytes is over the configured {max} byte ceiling");
            eprintln!("It's too big a file, try another one. Less than {max} bytes...");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
