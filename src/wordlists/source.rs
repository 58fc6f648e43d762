//! Random word drawing

use crate::core::{Word, WordSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A word source needs at least one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordList;

impl fmt::Display for EmptyWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word list contains no valid words")
    }
}

impl std::error::Error for EmptyWordList {}

/// Draws words uniformly at random, independently each time
#[derive(Debug, Clone)]
pub struct RandomWords<R = StdRng> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> RandomWords<R> {
    /// # Errors
    ///
    /// Returns `EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>, rng: R) -> Result<Self, EmptyWordList> {
        if words.is_empty() {
            return Err(EmptyWordList);
        }
        Ok(Self { words, rng })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl RandomWords<StdRng> {
    /// Seeded for reproducible games, OS-seeded otherwise
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if `words` is empty.
    pub fn with_seed(words: Vec<Word>, seed: Option<u64>) -> Result<Self, EmptyWordList> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(words, rng)
    }
}

impl<R: Rng> WordSource for RandomWords<R> {
    fn next_word(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}
