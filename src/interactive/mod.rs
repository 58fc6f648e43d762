//! Interactive TUI
//!
//! Full-screen game board using ratatui.

mod app;
mod rendering;

pub use app::{App, Cursor, Statistics, run_tui};
