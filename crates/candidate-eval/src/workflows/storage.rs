//! Flat-file plumbing shared by the candidate and user stores.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Failure reading or rewriting one of the desk's CSV files.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid CSV data in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("store lock poisoned")]
    Poisoned,
}

/// A record that could not be decoded and was left out of the loaded collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: u64,
    pub reason: String,
}

/// Opens `path` for reading. A missing file is reported as `None` rather than an error.
pub(crate) fn open_existing(path: &Path) -> Result<Option<File>, StorageError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Rewrites `path` wholesale through a sibling temporary file and a rename, so a failed write
/// never truncates the previous contents.
pub(crate) fn replace_file<F>(path: &Path, write_body: F) -> Result<(), StorageError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), csv::Error>,
{
    let temp_path = temp_sibling(path);
    let write_error = |source: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let file = File::create(&temp_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let written = write_body(&mut writer)
        .map_err(|source| StorageError::Csv {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|()| writer.flush().map_err(write_error));

    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(write_error)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
