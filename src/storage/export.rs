use std::fs;
use std::path::Path;

use log::{error, info};

use super::error::StorageError;
use crate::library::Library;

const HEADER: &str = "=== Personal Library Export ===";
const HEADER_RULE_WIDTH: usize = 50;
const RECORD_RULE_WIDTH: usize = 30;

/// Render the plain-text report: a header with the total count followed by
/// one labeled block per book.
pub fn render_report(library: &Library) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");
    out.push_str(&format!("Total Books: {}\n", library.len()));
    out.push_str(&"=".repeat(HEADER_RULE_WIDTH));
    out.push_str("\n\n");

    for (index, book) in library.books().iter().enumerate() {
        out.push_str(&format!("Book #{}:\n", index + 1));
        out.push_str(&format!("Title: {}\n", book.title()));
        out.push_str(&format!("Author: {}\n", book.author()));
        out.push_str(&format!("Year: {}\n", book.year()));
        out.push_str(&format!("Genre: {}\n", book.genre()));
        out.push_str(&format!("Read: {}\n", book.read_label()));
        out.push_str(&"-".repeat(RECORD_RULE_WIDTH));
        out.push_str("\n\n");
    }

    out
}

/// Write the report to `path`, replacing any previous export. This never
/// touches the JSON store or its backup.
pub fn export_report(library: &Library, path: &Path) -> Result<(), StorageError> {
    fs::write(path, render_report(library)).map_err(|source| {
        let err = StorageError::Write {
            path: path.to_path_buf(),
            source,
        };
        error!("error exporting library to text file: {err}");
        err
    })?;
    info!("exported {} books to {}", library.len(), path.display());
    Ok(())
}
