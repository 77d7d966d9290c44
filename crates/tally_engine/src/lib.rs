//! Tally engine: corpus I/O, the streaming read pass, and aggregate stores.
mod guard;
mod persist;
mod pipeline;
mod reader;
mod sink;
mod types;
mod writer;

pub use guard::{check_file_size, GuardError};
pub use persist::JsonFileStore;
pub use pipeline::{run_pipeline, PipelineConfig, PipelineError, PipelineReport};
pub use reader::ReadPass;
pub use sink::{MemoryStore, SinkError, UpsertSink};
pub use types::{PassError, PassOutcome, PassSummary, StopCause};
pub use writer::{write_corpus, LoremGenerator, TextGenerator, WriteError};
