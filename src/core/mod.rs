//! Core domain types for Hangman
//!
//! The word, the guessed letters, the life list and the pure derivations over them.
//! Nothing in here knows about terminals or randomness.

pub mod derive;
mod farewell;
mod game;
mod guesses;
mod lives;
mod word;

pub use derive::{KEYBOARD_ROWS, KeyState, Slot, Status};
pub use farewell::farewell_text;
pub use game::{Game, Outcome, WordSource};
pub use guesses::GuessedLetters;
pub use lives::{LANGUAGES, Language, Rgb, max_lives};
pub use word::{Word, WordError};
