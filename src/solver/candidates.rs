//! Dictionary-aware guessing
//!
//! Narrows a dictionary down to the words that still fit the board, then plays the untried
//! letter found in the most of them.

use super::strategy::{ENGLISH_FREQUENCY, Guesser};
use crate::core::{Game, Slot, Word};
use rand::Rng;

/// Dictionary words consistent with what the board shows
///
/// A word fits when it has the same length, every revealed slot matches, and no hidden slot
/// holds a letter that was already guessed.
#[must_use]
pub fn matching_candidates<'a>(game: &Game<'_>, dictionary: &'a [Word]) -> Vec<&'a Word> {
    let slots = game.slots();
    let guesses = game.guesses();

    dictionary
        .iter()
        .filter(|word| word.len() == slots.len())
        .filter(|word| {
            word.chars().zip(&slots).all(|(letter, slot)| match slot {
                Slot::Revealed(shown) => letter == *shown,
                Slot::Hidden | Slot::Missed(_) => !guesses.contains(letter),
            })
        })
        .collect()
}

/// Plays the letter that appears in the most remaining candidates
pub struct CandidateGuesser<'a> {
    dictionary: &'a [Word],
}

impl<'a> CandidateGuesser<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }
}

impl Guesser for CandidateGuesser<'_> {
    fn next_letter<R: Rng>(&self, game: &Game<'_>, _rng: &mut R) -> Option<char> {
        if game.is_over() {
            return None;
        }

        let candidates = matching_candidates(game, self.dictionary);

        // Words containing each letter, not occurrences
        let mut counts = [0usize; 26];
        for word in &candidates {
            for (i, count) in counts.iter_mut().enumerate() {
                let letter = char::from(b'a' + i as u8);
                if word.contains(letter) {
                    *count += 1;
                }
            }
        }

        // Ties and an empty candidate set fall back to frequency order
        ENGLISH_FREQUENCY
            .chars()
            .filter(|&letter| game.is_key_enabled(letter))
            .max_by_key(|&letter| {
                let rank = ENGLISH_FREQUENCY.find(letter).unwrap_or(0);
                (counts[(letter as u8 - b'a') as usize], usize::MAX - rank)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["react", "ruby", "rust", "scala", "swift", "kotlin"])
    }

    #[test]
    fn candidates_filter_by_length() {
        let dict = dictionary();
        let game = Game::new(Word::new("rust").unwrap(), LANGUAGES);
        let texts: Vec<_> = matching_candidates(&game, &dict)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["ruby", "rust"]);
    }

    #[test]
    fn candidates_respect_revealed_and_wrong_letters() {
        let dict = dictionary();
        let mut game = Game::new(Word::new("swift").unwrap(), LANGUAGES);
        game.guess('s');
        game.guess('a');

        let texts: Vec<_> = matching_candidates(&game, &dict)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["swift"]);
    }

    #[test]
    fn hidden_slot_cannot_hold_guessed_letter() {
        let dict = words_from_slice(&["abca", "abcd"]);
        let mut game = Game::new(Word::new("abcd").unwrap(), LANGUAGES);
        game.guess('a');

        // "abca" would have shown both a's
        let texts: Vec<_> = matching_candidates(&game, &dict)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, ["abcd"]);
    }

    #[test]
    fn guesser_prefers_discriminating_letters() {
        let dict = dictionary();
        let mut game = Game::new(Word::new("ruby").unwrap(), LANGUAGES);
        game.guess('r');
        game.guess('u');

        // "ruby" and "rust" remain; every untried letter is in at most one, frequency breaks ties
        let mut rng = StdRng::seed_from_u64(0);
        let letter = CandidateGuesser::new(&dict).next_letter(&game, &mut rng);
        assert_eq!(letter, Some('t'));
    }

    #[test]
    fn guesser_solves_known_word() {
        let dict = dictionary();
        let guesser = CandidateGuesser::new(&dict);
        let mut rng = StdRng::seed_from_u64(0);

        for target in ["react", "ruby", "kotlin", "scala"] {
            let mut game = Game::new(Word::new(target).unwrap(), LANGUAGES);
            while let Some(letter) = guesser.next_letter(&game, &mut rng) {
                game.guess(letter);
            }
            assert!(game.is_won(), "failed on {target}");
        }
    }

    #[test]
    fn guesser_without_candidates_falls_back() {
        let mut rng = StdRng::seed_from_u64(0);
        let game = Game::new(Word::new("zzz").unwrap(), LANGUAGES);
        assert_eq!(
            CandidateGuesser::new(&[]).next_letter(&game, &mut rng),
            Some('e')
        );
    }
}
