//! Ratatui front-end: a numbered menu on the left, the current view on the
//! right, and a status footer. Keys `1`..`7` drive the library; modal dialogs
//! collect the add/remove/search input.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
