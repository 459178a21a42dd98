//! Core library surface for the Personal Library Manager.
//!
//! The `bin` target only wires these pieces together: resolve the data
//! directory, load the library (falling back to the backup file), and hand it
//! to the terminal UI. Tests drive the same modules directly.
pub mod library;
pub mod models;
pub mod storage;
pub mod ui;

/// The record store and its domain types.
pub use library::{GenreCount, Library, LibraryStats};
pub use models::{parse_read_flag, parse_year, Book, BookError, MAX_YEAR, MIN_YEAR};

/// Persistence entry points used by `main.rs` and the integration tests.
pub use storage::{
    export_report, serialize_library, LibraryFiles, LibraryPaths, LoadReport, LoadSource,
    SaveReport, StorageError,
};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
