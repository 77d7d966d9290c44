use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("input is not valid utf-8 near byte {offset}")]
    InvalidUtf8 { offset: u64 },
}

/// Why a read pass stopped before reaching the end of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopCause {
    /// The sink refused a batch. Nothing was retried; segments committed
    /// before the failure stay committed.
    SinkFailure(String),
    /// Cooperative cancellation was observed before a read or an upsert.
    Cancelled,
}

impl fmt::Display for StopCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCause::SinkFailure(detail) => write!(f, "sink failure: {detail}"),
            StopCause::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// How far a read pass got. A pass that stops early is not an error: prior
/// upserts remain committed and the caller decides what to do about the
/// unprocessed remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    CompletedAll,
    StoppedEarly { cause: StopCause },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub outcome: PassOutcome,
    /// Segments whose counts the sink accepted.
    pub segments: u64,
}

impl PassSummary {
    pub fn completed_all(&self) -> bool {
        self.outcome == PassOutcome::CompletedAll
    }
}
