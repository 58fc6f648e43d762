//! Letter selection strategies
//!
//! Defines the Guesser trait and the simple implementations.

use super::CandidateGuesser;
use crate::core::{Game, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Letters ordered by how often they appear in English text
pub const ENGLISH_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next letter to guess
pub trait Guesser {
    /// Pick a letter whose key is still enabled
    ///
    /// Returns `None` once the game is over.
    fn next_letter<R: Rng>(&self, game: &Game<'_>, rng: &mut R) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of guesser while maintaining static dispatch.
pub enum GuesserType<'a> {
    /// Dictionary-aware guesser (default, strongest)
    Candidates(CandidateGuesser<'a>),
    /// Fixed English letter frequency order
    Frequency(FrequencyGuesser),
    /// Uniformly random enabled key
    Random(RandomGuesser),
}

impl Guesser for GuesserType<'_> {
    fn next_letter<R: Rng>(&self, game: &Game<'_>, rng: &mut R) -> Option<char> {
        match self {
            Self::Candidates(g) => g.next_letter(game, rng),
            Self::Frequency(g) => g.next_letter(game, rng),
            Self::Random(g) => g.next_letter(game, rng),
        }
    }
}

impl<'a> GuesserType<'a> {
    /// Create guesser from name string
    ///
    /// Supported names: "candidates", "frequency", "random".
    /// Defaults to candidates if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, dictionary: &'a [Word]) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Candidates(CandidateGuesser::new(dictionary)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidates(_) => "candidates",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Always plays the most common English letter not yet tried
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng>(&self, game: &Game<'_>, _rng: &mut R) -> Option<char> {
        ENGLISH_FREQUENCY
            .chars()
            .find(|&letter| game.is_key_enabled(letter))
    }
}

/// Presses any enabled key
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng>(&self, game: &Game<'_>, rng: &mut R) -> Option<char> {
        let enabled: Vec<char> = ('a'..='z')
            .filter(|&letter| game.is_key_enabled(letter))
            .collect();
        enabled.choose(rng).copied()
    }
}
