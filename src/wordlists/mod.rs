//! Word lists for Hangman
//!
//! Provides the embedded word list plus loading and random drawing helpers.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{EmptyWordList, RandomWords};

const _: () = assert!(WORDS_COUNT > 100, "embedded word list is too small");
