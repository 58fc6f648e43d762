//! Automatic guessers
//!
//! Letter-picking strategies used to play games without a human, e.g. for simulation.

pub mod candidates;
pub mod strategy;

pub use candidates::{CandidateGuesser, matching_candidates};
pub use strategy::{FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
