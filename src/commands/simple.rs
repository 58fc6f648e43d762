//! Simple interactive CLI mode
//!
//! Line-based game for terminals without TUI support

use crate::core::{Game, Language, WordSource};
use crate::output::display::print_board;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<S: WordSource>(source: &mut S, lives: &[Language]) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play_simple(source, lives, &mut stdin.lock(), &mut stdout)
}

/// Game loop over arbitrary input and output
///
/// Ends on `quit`, on end of input, or when the player declines another game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_simple<S: WordSource, R: BufRead, W: Write>(
    source: &mut S,
    lives: &[Language],
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                         HANGMAN                              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word in under {} attempts to keep the programming world safe from Assembly!",
        crate::core::max_lives(lives)
    )?;
    writeln!(out, "Type a letter to guess, 'quit' to exit.\n")?;

    let mut game = Game::start(source, lives);

    loop {
        print_board(out, &game)?;

        if game.is_over() {
            if let Some("yes" | "y") = prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                game.start_new_game(source);
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let Some(line) = prompt(input, out, "Guess")? else {
            return Ok(());
        };

        match line.as_str() {
            "quit" | "exit" => {
                info!("simple mode quit");
                writeln!(out, "\n👋 The word was {}.\n", game.word().text().to_uppercase())?;
                return Ok(());
            }
            letter if is_single_letter(letter) => {
                let c = letter.chars().next().unwrap_or_default();
                if !game.guess(c) {
                    writeln!(
                        out,
                        "{}",
                        format!("You already guessed {}.", c.to_ascii_uppercase()).yellow()
                    )?;
                }
            }
            _ => {
                writeln!(out, "{}", "Enter a single letter a-z.".red())?;
            }
        }
    }
}

fn is_single_letter(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Read one trimmed, lowercased line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
