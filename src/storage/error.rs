use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// File and format problems met while reading or writing library files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{} is corrupted: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid data format in {}: expected a list of books", path.display())]
    NotAnArray { path: PathBuf },
    #[error("could not serialize library: {0}")]
    Serialize(#[from] serde_json::Error),
}
