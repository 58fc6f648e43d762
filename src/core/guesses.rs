//! Guessed letters
//!
//! An insertion-ordered set of letters. At most 26 entries, so a plain vector is enough.

/// Letters guessed so far, in the order they were played
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<char>,
}

impl GuessedLetters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Append a letter unless it is already present
    ///
    /// Returns `true` when the letter was new.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Most recent guess
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.letters.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut guesses = Self::new();
        for letter in iter {
            guesses.insert(letter);
        }
        guesses
    }
}
