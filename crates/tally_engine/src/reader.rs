use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

use tally_core::{split_at_last_space, word_counts, SplitOutcome};
use tally_logging::{tally_error, tally_info};

use crate::sink::UpsertSink;
use crate::types::{PassError, PassOutcome, PassSummary, StopCause};

/// Streaming read pass over one corpus file.
///
/// The file is consumed in buffer-sized fills. Each fill is appended to the
/// leftover carried from the previous fill, the combined window is split at
/// its last space, and the complete part is counted and upserted before the
/// next fill is read. The sequence is strictly serial: read, count, upsert,
/// repeat. No word is ever split across two windows, and concatenating the
/// emitted segments (with their separating spaces) plus the final leftover
/// reproduces the file exactly.
///
/// `buffer_size` is a character budget. Fills read that many bytes at a time
/// and decode them as UTF-8, so a fill yields at most `buffer_size`
/// characters; a multi-byte sequence cut by the read boundary is carried
/// into the next fill rather than corrupted.
pub struct ReadPass {
    buffer_size: usize,
}

enum Step {
    Committed,
    Stopped(StopCause),
}

impl ReadPass {
    pub fn new(buffer_size: usize) -> Result<Self, PassError> {
        if buffer_size == 0 {
            return Err(PassError::InvalidConfig("buffer size must be positive"));
        }
        Ok(Self { buffer_size })
    }

    /// Runs the pass to completion, early stop, or failure.
    ///
    /// An unreadable file is an error; a sink failure or cancellation is a
    /// normal result carrying [`PassOutcome::StoppedEarly`]. Segments
    /// committed before the stop stay committed either way.
    pub async fn run(
        &self,
        path: &Path,
        sink: &dyn UpsertSink,
        cancel: &CancellationToken,
    ) -> Result<PassSummary, PassError> {
        let mut file = File::open(path).await?;
        let mut buf = vec![0u8; self.buffer_size];
        let mut decoder = Utf8Carry::default();
        let mut leftover = String::new();
        let mut segments = 0u64;

        loop {
            if cancel.is_cancelled() {
                return Ok(stopped(segments, StopCause::Cancelled));
            }

            let read = file.read(&mut buf).await?;
            if read == 0 {
                break;
            }
            let decoded = decoder.push(&buf[..read])?;
            if decoded.is_empty() {
                // The fill was swallowed whole by an incomplete multi-byte
                // sequence; read again.
                continue;
            }

            let window = format!("{leftover}{decoded}");
            match split_at_last_space(&window) {
                SplitOutcome::Complete {
                    segment,
                    leftover: rest,
                } => {
                    match commit_segment(sink, cancel, segment, &mut segments).await {
                        Step::Committed => {}
                        Step::Stopped(cause) => return Ok(stopped(segments, cause)),
                    }
                    leftover = rest.to_string();
                }
                SplitOutcome::NoBoundary { leftover: all } => {
                    leftover = all.to_string();
                }
            }
        }

        decoder.finish()?;

        if !leftover.is_empty() {
            match commit_segment(sink, cancel, &leftover, &mut segments).await {
                Step::Committed => {}
                Step::Stopped(cause) => return Ok(stopped(segments, cause)),
            }
        }

        Ok(PassSummary {
            outcome: PassOutcome::CompletedAll,
            segments,
        })
    }
}

fn stopped(segments: u64, cause: StopCause) -> PassSummary {
    PassSummary {
        outcome: PassOutcome::StoppedEarly { cause },
        segments,
    }
}

async fn commit_segment(
    sink: &dyn UpsertSink,
    cancel: &CancellationToken,
    text: &str,
    segments: &mut u64,
) -> Step {
    if cancel.is_cancelled() {
        return Step::Stopped(StopCause::Cancelled);
    }

    let counts = word_counts(text);
    match sink.upsert(&counts).await {
        Ok(()) => {
            *segments += 1;
            tally_info!("processed part {} of file", segments);
            Step::Committed
        }
        Err(err) => {
            tally_error!(
                "upsert failed after {} committed parts, stopping the pass: {}",
                segments,
                err
            );
            Step::Stopped(StopCause::SinkFailure(err.to_string()))
        }
    }
}

/// Incremental UTF-8 decoding with carry-over of a trailing incomplete
/// multi-byte sequence between fills.
#[derive(Debug, Default)]
struct Utf8Carry {
    carry: Vec<u8>,
    offset: u64,
}

impl Utf8Carry {
    fn push(&mut self, bytes: &[u8]) -> Result<String, PassError> {
        let mut data = std::mem::take(&mut self.carry);
        data.extend_from_slice(bytes);

        let valid = match std::str::from_utf8(&data) {
            Ok(_) => data.len(),
            // error_len() of None means the tail is a prefix of a valid
            // sequence; keep it for the next fill.
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => {
                return Err(PassError::InvalidUtf8 {
                    offset: self.offset + err.valid_up_to() as u64,
                })
            }
        };

        self.carry = data.split_off(valid);
        self.offset += valid as u64;
        // `data` now holds only the validated prefix, so the lossy
        // conversion cannot replace anything.
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    fn finish(&self) -> Result<(), PassError> {
        if self.carry.is_empty() {
            Ok(())
        } else {
            Err(PassError::InvalidUtf8 {
                offset: self.offset,
            })
        }
    }
}
