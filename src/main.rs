//! Binary entry point: resolve the data directory, route logging into a file
//! (the terminal belongs to the UI), load the library, and run the menu loop.
use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use personal_library_manager::{run_app, App, LibraryFiles, LibraryPaths};

fn main() -> Result<()> {
    let paths = LibraryPaths::resolve()?;
    init_logging(&paths)?;

    let files = LibraryFiles::new(paths);
    let loaded = files.load();

    let mut app = App::new(files, loaded);
    run_app(&mut app)?;

    for line in app.farewell() {
        println!("{line}");
    }
    Ok(())
}

/// Send `log` output to the log file next to the library. `RUST_LOG`
/// overrides the default `info` filter.
fn init_logging(paths: &LibraryPaths) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log)
        .with_context(|| format!("failed to open log file {}", paths.log.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
