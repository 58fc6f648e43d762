//! Derived game state
//!
//! Everything here is recomputed from the word and the guessed letters. Nothing is stored.

use super::farewell::farewell_text;
use super::guesses::GuessedLetters;
use super::lives::{Language, max_lives};
use super::word::Word;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Number of guesses that missed the word
#[must_use]
pub fn wrong_guess_count(word: &Word, guesses: &GuessedLetters) -> usize {
    guesses.iter().filter(|&letter| !word.contains(letter)).count()
}

/// Every letter of the word has been guessed
#[must_use]
pub fn is_game_won(word: &Word, guesses: &GuessedLetters) -> bool {
    word.chars().all(|letter| guesses.contains(letter))
}

#[must_use]
pub const fn is_game_lost(wrong_count: usize, max_lives: usize) -> bool {
    wrong_count >= max_lives
}

#[must_use]
pub const fn is_game_over(won: bool, lost: bool) -> bool {
    won || lost
}

/// The most recent guess missed. False before any guess.
#[must_use]
pub fn last_guess_incorrect(word: &Word, guesses: &GuessedLetters) -> bool {
    guesses.last().is_some_and(|letter| !word.contains(letter))
}

/// Banner shown above the lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Taunt for the language just lost
    Farewell(String),
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Farewell(text) => text,
            Self::Won => "You win!",
            Self::Lost => "You lost!",
        }
    }

    #[must_use]
    pub const fn subtitle(&self) -> Option<&'static str> {
        match self {
            Self::Farewell(_) => None,
            Self::Won => Some("Well done!"),
            Self::Lost => Some("Better start learning Assembly!"),
        }
    }
}

/// Select the banner: farewell, then win, then loss
#[must_use]
pub fn status_message(word: &Word, guesses: &GuessedLetters, lives: &[Language]) -> Option<Status> {
    let wrong = wrong_guess_count(word, guesses);
    let won = is_game_won(word, guesses);
    let lost = is_game_lost(wrong, max_lives(lives));

    if !is_game_over(won, lost) && last_guess_incorrect(word, guesses) {
        return wrong
            .checked_sub(1)
            .and_then(|index| lives.get(index))
            .map(|language| Status::Farewell(farewell_text(language.name)));
    }

    if won {
        Some(Status::Won)
    } else if lost {
        Some(Status::Lost)
    } else {
        None
    }
}

/// What a letter slot of the word displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Hidden,
    Revealed(char),
    /// Shown after a loss for letters the player never found
    Missed(char),
}

/// Slot contents in word order
#[must_use]
pub fn slots(word: &Word, guesses: &GuessedLetters, lost: bool) -> Vec<Slot> {
    word.chars()
        .map(|letter| match (guesses.contains(letter), lost) {
            (true, _) => Slot::Revealed(letter),
            (false, true) => Slot::Missed(letter),
            (false, false) => Slot::Hidden,
        })
        .collect()
}

/// Coloring of an on-screen key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unguessed,
    Correct,
    Wrong,
}

#[must_use]
pub fn key_state(word: &Word, guesses: &GuessedLetters, letter: char) -> KeyState {
    if !guesses.contains(letter) {
        KeyState::Unguessed
    } else if word.contains(letter) {
        KeyState::Correct
    } else {
        KeyState::Wrong
    }
}

/// Life at `index` is gone
#[inline]
#[must_use]
pub const fn is_life_lost(index: usize, wrong_count: usize) -> bool {
    index < wrong_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn guesses(letters: &str) -> GuessedLetters {
        letters.chars().collect()
    }

    #[test]
    fn wrong_count_ignores_hits() {
        let w = word("react");
        assert_eq!(wrong_guess_count(&w, &guesses("")), 0);
        assert_eq!(wrong_guess_count(&w, &guesses("rxa")), 1);
        assert_eq!(wrong_guess_count(&w, &guesses("xyzq")), 4);
    }

    #[test]
    fn react_fully_guessed_is_won() {
        let w = word("react");
        let g = guesses("react");
        let wrong = wrong_guess_count(&w, &g);

        assert!(is_game_won(&w, &g));
        assert!(!is_game_lost(wrong, max_lives(LANGUAGES)));
    }

    #[test]
    fn won_despite_wrong_guesses() {
        let w = word("react");
        let g = guesses("xyzreact");
        assert!(is_game_won(&w, &g));
        assert_eq!(wrong_guess_count(&w, &g), 3);
    }

    #[test]
    fn seven_misses_with_eight_lives_is_lost() {
        let lives = &LANGUAGES[..8];
        let w = word("react");
        let g = guesses("bdfghij");

        assert_eq!(wrong_guess_count(&w, &g), 7);
        assert!(is_game_lost(wrong_guess_count(&w, &g), max_lives(lives)));
    }

    #[test]
    fn lost_exactly_at_threshold() {
        assert!(!is_game_lost(7, 8));
        assert!(is_game_lost(8, 8));
        assert!(is_game_lost(9, 8));
    }

    #[test]
    fn over_when_won_or_lost() {
        assert!(!is_game_over(false, false));
        assert!(is_game_over(true, false));
        assert!(is_game_over(false, true));
    }

    #[test]
    fn last_guess_incorrect_cases() {
        let w = word("react");
        assert!(!last_guess_incorrect(&w, &guesses("")));
        assert!(last_guess_incorrect(&w, &guesses("rz")));
        assert!(!last_guess_incorrect(&w, &guesses("zr")));
    }

    #[test]
    fn no_status_before_any_guess() {
        assert_eq!(status_message(&word("react"), &guesses(""), LANGUAGES), None);
    }

    #[test]
    fn no_status_after_correct_guess() {
        assert_eq!(
            status_message(&word("react"), &guesses("zr"), LANGUAGES),
            None
        );
    }

    #[test]
    fn farewell_names_language_just_lost() {
        let status = status_message(&word("react"), &guesses("z"), LANGUAGES);
        assert_eq!(status, Some(Status::Farewell(farewell_text("HTML"))));

        let status = status_message(&word("react"), &guesses("zq"), LANGUAGES);
        assert_eq!(status, Some(Status::Farewell(farewell_text("CSS"))));
    }

    #[test]
    fn win_status() {
        let status = status_message(&word("react"), &guesses("zreact"), LANGUAGES);
        assert_eq!(status, Some(Status::Won));
    }

    #[test]
    fn loss_beats_farewell_when_over() {
        let status = status_message(&word("react"), &guesses("bdfghijk"), LANGUAGES);
        assert_eq!(status, Some(Status::Lost));
    }

    #[test]
    fn status_texts() {
        assert_eq!(Status::Won.title(), "You win!");
        assert_eq!(Status::Won.subtitle(), Some("Well done!"));
        assert_eq!(Status::Lost.title(), "You lost!");
        assert_eq!(
            Status::Farewell("bye".to_string()).title(),
            "bye"
        );
        assert_eq!(Status::Farewell("bye".to_string()).subtitle(), None);
    }

    #[test]
    fn slots_reveal_guessed_letters() {
        let w = word("react");
        let s = slots(&w, &guesses("ae"), false);
        assert_eq!(
            s,
            vec![
                Slot::Hidden,
                Slot::Revealed('e'),
                Slot::Revealed('a'),
                Slot::Hidden,
                Slot::Hidden
            ]
        );
    }

    #[test]
    fn slots_mark_missed_after_loss() {
        let w = word("react");
        let s = slots(&w, &guesses("r"), true);
        assert_eq!(s[0], Slot::Revealed('r'));
        assert_eq!(s[1], Slot::Missed('e'));
        assert_eq!(s[4], Slot::Missed('t'));
    }

    #[test]
    fn repeated_letters_reveal_together() {
        let w = word("banana");
        let s = slots(&w, &guesses("a"), false);
        let revealed = s.iter().filter(|slot| **slot == Slot::Revealed('a')).count();
        assert_eq!(revealed, 3);
    }

    #[test]
    fn key_states() {
        let w = word("react");
        let g = guesses("rz");
        assert_eq!(key_state(&w, &g, 'r'), KeyState::Correct);
        assert_eq!(key_state(&w, &g, 'z'), KeyState::Wrong);
        assert_eq!(key_state(&w, &g, 'e'), KeyState::Unguessed);
    }

    #[test]
    fn lives_lost_from_the_front() {
        assert!(is_life_lost(0, 1));
        assert!(!is_life_lost(1, 1));
        assert!(!is_life_lost(0, 0));
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, expected);
    }
}
