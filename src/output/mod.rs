//! Terminal output formatting
//!
//! Display utilities for the line-based game and simulation results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_simulation_result};
