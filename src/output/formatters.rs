//! Formatting utilities for terminal output

use crate::core::{Game, KeyState, Slot};

/// Word slots as text, e.g. `R _ A _ T`
#[must_use]
pub fn masked_word(game: &Game<'_>) -> String {
    game.slots()
        .iter()
        .map(|slot| match slot {
            Slot::Hidden => '_',
            Slot::Revealed(letter) | Slot::Missed(letter) => letter.to_ascii_uppercase(),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters that missed, uppercase, in guess order
#[must_use]
pub fn wrong_letters(game: &Game<'_>) -> String {
    game.guesses()
        .iter()
        .filter(|&letter| game.key_state(letter) == KeyState::Wrong)
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
