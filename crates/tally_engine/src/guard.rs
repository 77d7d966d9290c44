use std::fs;
use std::path::Path;

use thiserror::Error;

use tally_logging::tally_error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is {actual} bytes, over the {max} byte ceiling")]
    SizeExceeded { actual: u64, max: u64 },
}

/// Pre-flight check that gates the read pass: rejects files longer than
/// `max_bytes`. Returns the observed length on success and has no other
/// side effect. The caller decides what a violation means for the process;
/// the binary exits non-zero, a library embedder may do otherwise.
pub fn check_file_size(path: &Path, max_bytes: u64) -> Result<u64, GuardError> {
    if max_bytes == 0 {
        return Err(GuardError::InvalidConfig("max file size must be positive"));
    }

    let actual = fs::metadata(path)?.len();
    if actual > max_bytes {
        tally_error!("file of {actual} bytes is over the {max_bytes} byte ceiling, not processing");
        return Err(GuardError::SizeExceeded {
            actual,
            max: max_bytes,
        });
    }
    Ok(actual)
}
