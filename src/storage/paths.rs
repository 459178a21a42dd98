use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".personal-library-manager";
/// Canonical JSON store.
const LIBRARY_FILE_NAME: &str = "library.json";
/// Snapshot of the store taken right before each save.
const BACKUP_FILE_NAME: &str = "library_backup.json";
/// Human-readable report produced by the export action.
const EXPORT_FILE_NAME: &str = "library_export.txt";
/// Log output; the terminal itself belongs to the UI.
const LOG_FILE_NAME: &str = "library.log";

/// Every file the application reads or writes, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    pub primary: PathBuf,
    pub backup: PathBuf,
    pub export: PathBuf,
    pub log: PathBuf,
}

impl LibraryPaths {
    /// Lay out the standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            primary: dir.join(LIBRARY_FILE_NAME),
            backup: dir.join(BACKUP_FILE_NAME),
            export: dir.join(EXPORT_FILE_NAME),
            log: dir.join(LOG_FILE_NAME),
        }
    }

    /// Resolve the data directory inside the user's home and make sure it
    /// exists so the first save does not trip over a missing folder.
    pub fn resolve() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let dir = base_dirs.home_dir().join(DATA_DIR_NAME);
        fs::create_dir_all(&dir).context("failed to create data directory")?;
        Ok(Self::in_dir(dir))
    }
}
