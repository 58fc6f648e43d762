//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{play_simple, run_simple};
pub use simulate::{GameRecord, SimulateConfig, SimulationResult, play_game, run_simulation};
