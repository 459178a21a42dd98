//! Copy-before-overwrite persistence for the JSON store. Saving first
//! snapshots the current primary file into the backup, then rewrites the
//! primary; loading prefers the primary and falls back to the backup when the
//! primary is missing, unreadable, or not a list of valid books. Neither entry
//! point returns an error: every problem ends up in the returned report and in
//! the log so the menu loop can keep running.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::StorageError;
use super::paths::LibraryPaths;
use crate::library::Library;

/// Owner of the primary/backup pair for one library.
#[derive(Debug, Clone)]
pub struct LibraryFiles {
    paths: LibraryPaths,
}

/// What happened to the backup during a save.
#[derive(Debug)]
pub enum BackupOutcome {
    /// There was no primary file yet, so nothing to snapshot.
    Skipped,
    Copied,
    Failed(StorageError),
}

/// What happened to the backup-restore attempt after a failed primary write.
#[derive(Debug)]
pub enum Recovery {
    Restored,
    NoBackup,
    Failed(StorageError),
}

/// What happened to the primary file during a save.
#[derive(Debug)]
pub enum PrimaryOutcome {
    Written,
    Failed {
        error: StorageError,
        recovery: Recovery,
    },
}

/// Full account of one save attempt.
#[derive(Debug)]
pub struct SaveReport {
    pub backup: BackupOutcome,
    pub primary: PrimaryOutcome,
    path: PathBuf,
}

impl SaveReport {
    /// True when the library reached the primary file.
    pub fn is_saved(&self) -> bool {
        matches!(self.primary, PrimaryOutcome::Written)
    }

    /// True when the save went through without any warning.
    pub fn is_clean(&self) -> bool {
        self.is_saved() && !matches!(self.backup, BackupOutcome::Failed(_))
    }

    /// One-line message for the status bar.
    pub fn summary(&self) -> String {
        let file_name = display_name(&self.path);
        match (&self.primary, &self.backup) {
            (PrimaryOutcome::Written, BackupOutcome::Failed(err)) => format!(
                "Library saved to {file_name}, but could not create backup file: {err}"
            ),
            (PrimaryOutcome::Written, _) => format!("Library successfully saved to {file_name}"),
            (PrimaryOutcome::Failed { error, recovery }, _) => match recovery {
                Recovery::Restored => {
                    format!("Error saving library: {error}. Recovered from backup file.")
                }
                Recovery::NoBackup => {
                    format!("Error saving library: {error}. No backup file to recover from.")
                }
                Recovery::Failed(err) => {
                    format!("Error saving library: {error}. Error recovering from backup: {err}")
                }
            },
        }
    }
}

/// Which file the session's library came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Primary,
    Backup,
    Empty,
}

/// Result of the startup load.
#[derive(Debug)]
pub struct LoadReport {
    pub library: Library,
    pub source: LoadSource,
    /// Problems met before settling on `source`, in the order they occurred.
    pub problems: Vec<StorageError>,
}

impl LoadReport {
    /// One-line message for the status bar.
    pub fn summary(&self) -> String {
        let count = self.library.len();
        let loaded = match self.source {
            LoadSource::Primary => {
                format!("Library loaded successfully. Total books loaded: {count}")
            }
            LoadSource::Backup => {
                format!("Library loaded successfully from backup file. Total books loaded: {count}")
            }
            LoadSource::Empty => "Starting with an empty library".to_string(),
        };
        if self.problems.is_empty() {
            return loaded;
        }
        let problems: Vec<String> = self.problems.iter().map(ToString::to_string).collect();
        format!("Error: {}. {loaded}", problems.join("; "))
    }
}

impl LibraryFiles {
    pub fn new(paths: LibraryPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    /// Snapshot the primary into the backup, then write `library` as the new
    /// primary. A failed snapshot is only a warning; a failed primary write
    /// triggers a restore from the backup.
    pub fn save(&self, library: &Library) -> SaveReport {
        let backup = if self.paths.primary.exists() {
            match replace_file(&self.paths.primary, &self.paths.backup) {
                Ok(()) => {
                    info!(
                        "backed up {} to {}",
                        self.paths.primary.display(),
                        self.paths.backup.display()
                    );
                    BackupOutcome::Copied
                }
                Err(err) => {
                    warn!("could not create backup file: {err}");
                    BackupOutcome::Failed(err)
                }
            }
        } else {
            BackupOutcome::Skipped
        };

        let primary = match write_library(&self.paths.primary, library) {
            Ok(()) => {
                info!(
                    "saved {} books to {}",
                    library.len(),
                    self.paths.primary.display()
                );
                PrimaryOutcome::Written
            }
            Err(err) => {
                error!("error saving library: {err}");
                let recovery = self.restore_primary();
                PrimaryOutcome::Failed {
                    error: err,
                    recovery,
                }
            }
        };

        SaveReport {
            backup,
            primary,
            path: self.paths.primary.clone(),
        }
    }

    /// Read the primary, then the backup, and adopt the first one that holds
    /// a valid list of books. Falls back to an empty library.
    pub fn load(&self) -> LoadReport {
        let mut problems = Vec::new();
        let candidates = [
            (LoadSource::Primary, &self.paths.primary),
            (LoadSource::Backup, &self.paths.backup),
        ];

        for (source, path) in candidates {
            if !path.exists() {
                continue;
            }
            match read_library(path) {
                Ok(library) => {
                    info!(
                        "loaded {} books from {}",
                        library.len(),
                        path.display()
                    );
                    return LoadReport {
                        library,
                        source,
                        problems,
                    };
                }
                Err(err) => {
                    warn!("{err}");
                    problems.push(err);
                }
            }
        }

        info!("starting with an empty library");
        LoadReport {
            library: Library::new(),
            source: LoadSource::Empty,
            problems,
        }
    }

    fn restore_primary(&self) -> Recovery {
        if !self.paths.backup.exists() {
            warn!("no backup file to recover from");
            return Recovery::NoBackup;
        }
        match replace_file(&self.paths.backup, &self.paths.primary) {
            Ok(()) => {
                info!("recovered {} from backup file", self.paths.primary.display());
                Recovery::Restored
            }
            Err(err) => {
                error!("error recovering from backup: {err}");
                Recovery::Failed(err)
            }
        }
    }
}

/// Pretty JSON with a four-space indent. `serde_json` writes non-ASCII text
/// as-is, so titles such as "Cien años de soledad" stay readable.
pub fn serialize_library(library: &Library) -> Result<Vec<u8>, StorageError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    library.serialize(&mut serializer)?;
    Ok(buffer)
}

fn write_library(path: &Path, library: &Library) -> Result<(), StorageError> {
    let bytes = serialize_library(library)?;
    fs::write(path, bytes).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_library(path: &Path) -> Result<Library, StorageError> {
    let bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    if !value.is_array() {
        return Err(StorageError::NotAnArray {
            path: path.to_path_buf(),
        });
    }
    serde_json::from_value(value).map_err(|source| StorageError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy `from` over `to` through a sibling temp file and a rename, so `to` is
/// either the old content or the complete new content.
fn replace_file(from: &Path, to: &Path) -> Result<(), StorageError> {
    let bytes = fs::read(from).map_err(|source| StorageError::Read {
        path: from.to_path_buf(),
        source,
    })?;
    let temp_path = to.with_extension("tmp");
    fs::write(&temp_path, bytes).map_err(|source| StorageError::Write {
        path: temp_path.clone(),
        source,
    })?;
    fs::rename(&temp_path, to).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StorageError::Write {
            path: to.to_path_buf(),
            source,
        }
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
