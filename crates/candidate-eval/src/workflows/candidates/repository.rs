use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use super::codec;
use super::domain::Candidate;
use crate::workflows::storage::{self, SkippedRecord, StorageError};

/// Ordered, append-only candidate storage so the service can be exercised in isolation.
pub trait CandidateRepository: Send + Sync {
    /// Appends a candidate, saves the collection, and returns the new 1-based position.
    /// When the save fails the collection is left exactly as it was.
    fn append(&self, candidate: Candidate) -> Result<usize, StorageError>;
    /// Copy of the whole collection in insertion order.
    fn snapshot(&self) -> Result<Vec<Candidate>, StorageError>;
}

/// Candidate collection loaded wholesale from a CSV file and rewritten wholesale on every append.
#[derive(Debug)]
pub struct CsvCandidateRepository {
    path: PathBuf,
    records: Mutex<Vec<Candidate>>,
    skipped: Vec<SkippedRecord>,
}

impl CsvCandidateRepository {
    /// Loads `path`. A missing file is an empty collection; malformed lines are skipped and
    /// logged; unreadable files are errors.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let decoded = match storage::open_existing(&path)? {
            Some(file) => {
                codec::read_candidates(file).map_err(|source| StorageError::Csv {
                    path: path.clone(),
                    source,
                })?
            }
            None => {
                debug!(path = %path.display(), "candidate file not found, starting empty");
                codec::DecodedCandidates::default()
            }
        };

        for skipped in &decoded.skipped {
            warn!(
                path = %path.display(),
                line = skipped.line,
                reason = %skipped.reason,
                "skipping malformed candidate record"
            );
        }
        info!(
            path = %path.display(),
            loaded = decoded.candidates.len(),
            skipped = decoded.skipped.len(),
            "candidate file loaded"
        );

        Ok(Self {
            path,
            records: Mutex::new(decoded.candidates),
            skipped: decoded.skipped,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines left out during the initial load.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

impl CandidateRepository for CsvCandidateRepository {
    fn append(&self, candidate: Candidate) -> Result<usize, StorageError> {
        let mut guard = self.records.lock().map_err(|_| StorageError::Poisoned)?;
        guard.push(candidate);

        let saved = storage::replace_file(&self.path, |out| codec::write_candidates(out, &guard));
        if let Err(err) = saved {
            guard.pop();
            warn!(
                path = %self.path.display(),
                error = %err,
                "candidate file not saved, append rolled back"
            );
            return Err(err);
        }

        debug!(path = %self.path.display(), count = guard.len(), "candidate file saved");
        Ok(guard.len())
    }

    fn snapshot(&self) -> Result<Vec<Candidate>, StorageError> {
        let guard = self.records.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(guard.clone())
    }
}
