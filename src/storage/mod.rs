//! Persistence module split across logical submodules.

mod error;
mod export;
mod files;
mod paths;

pub use error::StorageError;
pub use export::{export_report, render_report};
pub use files::{
    serialize_library, BackupOutcome, LibraryFiles, LoadReport, LoadSource, PrimaryOutcome,
    Recovery, SaveReport,
};
pub use paths::LibraryPaths;
