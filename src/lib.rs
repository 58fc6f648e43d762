//! Hangman
//!
//! Guess the secret word one letter at a time before the programming languages run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, Word, LANGUAGES};
//!
//! let mut game = Game::new(Word::new("react").unwrap(), LANGUAGES);
//! game.guess('r');
//! game.guess('z');
//!
//! assert_eq!(game.wrong_guess_count(), 1);
//! assert!(!game.is_over());
//! ```

// Core domain types
pub mod core;

// Automatic guessers
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File logging
pub mod logging;
