use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use tally_core::WordCountMap;

use crate::sink::{SinkError, UpsertSink};

/// Durable word aggregate kept as a single JSON object on disk.
///
/// Each upsert is read-merge-replace: the current aggregate is loaded (a
/// missing file is an empty aggregate), the batch is merged in memory, and
/// the merged map is written to a temp file in the same directory and renamed
/// over the target. A failed call leaves the previous file untouched, which
/// is what gives the all-or-nothing batch contract. Any transactional store
/// with a merge statement can stand in for this through [`UpsertSink`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current aggregate, independent of any in-flight pass.
    pub fn snapshot(&self) -> Result<HashMap<String, u64>, SinkError> {
        self.load()
    }

    fn load(&self) -> Result<HashMap<String, u64>, SinkError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl UpsertSink for JsonFileStore {
    async fn upsert(&self, counts: &WordCountMap) -> Result<(), SinkError> {
        if counts.is_empty() {
            return Ok(());
        }

        let mut aggregate = self.load()?;
        for (word, count) in counts {
            *aggregate.entry(word.clone()).or_insert(0) += count;
        }

        let content = serde_json::to_string_pretty(&aggregate)?;
        write_atomic(&self.path, &content)
    }
}

/// Writes `content` to a temp file next to `target`, fsyncs, then renames it
/// into place so the target is never observed half-written.
fn write_atomic(target: &Path, content: &str) -> Result<(), SinkError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(target).map_err(|err| SinkError::Io(err.error))?;
    Ok(())
}
