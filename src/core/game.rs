//! Game state controller
//!
//! Owns the secret word and the guessed letters of one game. Everything else is derived on demand.

use super::derive::{
    KeyState, Slot, Status, is_game_lost, is_game_over, is_game_won, key_state,
    last_guess_incorrect, slots, status_message, wrong_guess_count,
};
use super::guesses::GuessedLetters;
use super::lives::{Language, max_lives};
use super::word::Word;
use tracing::{debug, info};

/// Supplies secret words for new games
pub trait WordSource {
    /// Draw the next word. Draws are independent, so repeats are allowed.
    fn next_word(&mut self) -> Word;
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game<'a> {
    word: Word,
    guesses: GuessedLetters,
    lives: &'a [Language],
}

impl<'a> Game<'a> {
    /// Start a game on a known word
    #[must_use]
    pub const fn new(word: Word, lives: &'a [Language]) -> Self {
        Self {
            word,
            guesses: GuessedLetters::new(),
            lives,
        }
    }

    /// Start a game on a word drawn from `source`
    pub fn start(source: &mut impl WordSource, lives: &'a [Language]) -> Self {
        let game = Self::new(source.next_word(), lives);
        debug!(letters = game.word.len(), "game started");
        game
    }

    /// Replace the word and clear all guesses
    pub fn start_new_game(&mut self, source: &mut impl WordSource) {
        self.word = source.next_word();
        self.guesses.clear();
        info!(letters = self.word.len(), "new game");
    }

    /// Record a guess unless it was already made
    ///
    /// Does not check whether the game is over; the keyboard is disabled at that point.
    /// Returns `true` when the letter was new.
    pub fn add_guess_letter(&mut self, letter: char) -> bool {
        let added = self.guesses.insert(letter);
        if added {
            debug!(%letter, hit = self.word.contains(letter), "guess");
        }
        added
    }

    /// Press a key on the keyboard
    ///
    /// Ignored when the key is disabled or not a letter. Returns `true` when the guess was recorded.
    pub fn guess(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() || !self.is_key_enabled(letter) {
            return false;
        }

        self.add_guess_letter(letter);
        if let Some(outcome) = self.outcome() {
            info!(?outcome, word = %self.word, wrong = self.wrong_guess_count(), "game over");
        }
        true
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessedLetters {
        &self.guesses
    }

    #[must_use]
    pub const fn lives(&self) -> &'a [Language] {
        self.lives
    }

    #[must_use]
    pub const fn max_lives(&self) -> usize {
        max_lives(self.lives)
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        wrong_guess_count(&self.word, &self.guesses)
    }

    /// Lives still standing, excluding the final entry
    #[must_use]
    pub fn remaining_lives(&self) -> usize {
        self.max_lives().saturating_sub(self.wrong_guess_count())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        is_game_won(&self.word, &self.guesses)
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        is_game_lost(self.wrong_guess_count(), self.max_lives())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        is_game_over(self.is_won(), self.is_lost())
    }

    /// Win is checked before loss
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_won() {
            Some(Outcome::Won)
        } else if self.is_lost() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    #[must_use]
    pub fn last_guess_incorrect(&self) -> bool {
        last_guess_incorrect(&self.word, &self.guesses)
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        status_message(&self.word, &self.guesses, self.lives)
    }

    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        slots(&self.word, &self.guesses, self.is_lost())
    }

    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        key_state(&self.word, &self.guesses, letter)
    }

    /// Keys lock once pressed and all of them lock when the game ends
    #[must_use]
    pub fn is_key_enabled(&self, letter: char) -> bool {
        !self.is_over() && !self.guesses.contains(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::core::farewell::farewell_text;

    /// Hands out words in order, cycling
    struct Fixed {
        words: Vec<&'static str>,
        next: usize,
    }

    impl Fixed {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.to_vec(),
                next: 0,
            }
        }
    }

    impl WordSource for Fixed {
        fn next_word(&mut self) -> Word {
            let word = self.words[self.next % self.words.len()];
            self.next += 1;
            Word::new(word).unwrap()
        }
    }

    fn react() -> Game<'static> {
        Game::new(Word::new("react").unwrap(), LANGUAGES)
    }

    #[test]
    fn new_game_is_in_progress() {
        let game = react();
        assert!(game.guesses().is_empty());
        assert_eq!(game.wrong_guess_count(), 0);
        assert_eq!(game.remaining_lives(), 8);
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.status(), None);
    }

    #[test]
    fn start_draws_from_source() {
        let mut source = Fixed::new(&["kernel"]);
        let game = Game::start(&mut source, LANGUAGES);
        assert_eq!(game.word().text(), "kernel");
    }

    #[test]
    fn start_new_game_resets_guesses_and_word() {
        let mut source = Fixed::new(&["kernel", "socket"]);
        let mut game = Game::start(&mut source, LANGUAGES);
        game.guess('k');
        game.guess('z');

        game.start_new_game(&mut source);

        assert!(game.guesses().is_empty());
        assert_eq!(game.word().text(), "socket");
        assert_eq!(game.wrong_guess_count(), 0);
    }

    #[test]
    fn start_new_game_may_repeat_word() {
        let mut source = Fixed::new(&["kernel"]);
        let mut game = Game::start(&mut source, LANGUAGES);
        game.guess('k');

        game.start_new_game(&mut source);

        assert_eq!(game.word().text(), "kernel");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn add_guess_letter_is_idempotent() {
        let mut game = react();
        assert!(game.add_guess_letter('z'));
        assert!(!game.add_guess_letter('z'));

        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.wrong_guess_count(), 1);
    }

    #[test]
    fn winning_react() {
        let mut game = react();
        for letter in "react".chars() {
            assert!(game.guess(letter));
        }

        assert!(game.is_won());
        assert!(!game.is_lost());
        assert_eq!(game.outcome(), Some(Outcome::Won));
        assert_eq!(game.status(), Some(Status::Won));
    }

    #[test]
    fn losing_with_eight_lives() {
        let mut game = Game::new(Word::new("react").unwrap(), &LANGUAGES[..8]);
        for letter in "bdfghij".chars() {
            game.guess(letter);
        }

        assert_eq!(game.wrong_guess_count(), 7);
        assert!(game.is_lost());
        assert_eq!(game.outcome(), Some(Outcome::Lost));
        assert_eq!(game.status(), Some(Status::Lost));
    }

    #[test]
    fn guess_rejected_after_game_over() {
        let mut game = react();
        for letter in "react".chars() {
            game.guess(letter);
        }

        assert!(!game.guess('z'));
        assert_eq!(game.guesses().len(), 5);
        assert!(!game.is_key_enabled('z'));
    }

    #[test]
    fn guess_rejects_non_letters() {
        let mut game = react();
        assert!(!game.guess('1'));
        assert!(!game.guess(' '));
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn guess_lowercases() {
        let mut game = react();
        assert!(game.guess('R'));
        assert!(game.guesses().contains('r'));
        assert!(!game.guess('r'));
    }

    #[test]
    fn farewell_after_wrong_guess() {
        let mut game = react();
        game.guess('z');
        assert!(game.last_guess_incorrect());
        assert_eq!(game.status(), Some(Status::Farewell(farewell_text("HTML"))));

        game.guess('r');
        assert!(!game.last_guess_incorrect());
        assert_eq!(game.status(), None);
    }

    #[test]
    fn keys_disable_once_pressed() {
        let mut game = react();
        assert!(game.is_key_enabled('e'));
        game.guess('e');
        assert!(!game.is_key_enabled('e'));
        assert_eq!(game.key_state('e'), KeyState::Correct);
    }

    #[test]
    fn loss_reveals_missed_slots() {
        let mut game = react();
        game.guess('r');
        for letter in "bdfghijk".chars() {
            game.guess(letter);
        }

        assert!(game.is_lost());
        let slots = game.slots();
        assert_eq!(slots[0], Slot::Revealed('r'));
        assert!(slots[1..].iter().all(|s| matches!(s, Slot::Missed(_))));
    }
}
