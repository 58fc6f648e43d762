//! Display functions for the line-based game and command results

use super::formatters::{create_progress_bar, masked_word, wrong_letters};
use crate::commands::SimulationResult;
use crate::core::{Game, Outcome, Status, derive::is_life_lost};
use colored::Colorize;
use std::io::{self, Write};

/// Print the board of the line-based game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    if let Some(status) = game.status() {
        let title = match status {
            Status::Farewell(_) => status.title().bright_magenta().bold(),
            Status::Won => format!("🎉 {}", status.title()).bright_green().bold(),
            Status::Lost => format!("💀 {}", status.title()).bright_red().bold(),
        };
        writeln!(out, "{title}")?;
        if let Some(subtitle) = status.subtitle() {
            writeln!(out, "{subtitle}")?;
        }
        writeln!(out)?;
    }

    let wrong = game.wrong_guess_count();
    let lives: Vec<String> = game
        .lives()
        .iter()
        .enumerate()
        .map(|(index, language)| {
            if is_life_lost(index, wrong) {
                format!("💀{}", language.name)
                    .bright_black()
                    .strikethrough()
                    .to_string()
            } else {
                let (fg, bg) = (language.color, language.background_color);
                format!(" {} ", language.name)
                    .truecolor(fg.0, fg.1, fg.2)
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .to_string()
            }
        })
        .collect();
    writeln!(out, "Lives: {}", lives.join(" "))?;

    let word = masked_word(game);
    let word = if game.is_lost() {
        word.red().bold()
    } else {
        word.bright_white().bold()
    };
    writeln!(out, "\n    {word}\n")?;

    let misses = wrong_letters(game);
    if !misses.is_empty() {
        writeln!(
            out,
            "Misses: {}  ({} of {} left)",
            misses.red(),
            game.remaining_lives(),
            game.max_lives()
        )?;
    }

    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult, guesser_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        guesser_name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Wins:             {}", result.wins.to_string().green());
    println!("   Losses:           {}", result.losses.to_string().red());
    println!("   Average misses:   {:.2}", result.average_wrong);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for (wrong, &count) in result.wrong_distribution.iter().enumerate() {
        let pct = if result.games == 0 {
            0.0
        } else {
            count as f64 / result.games as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n🧗 {}", "Hardest words:".bright_cyan().bold());
        for record in &result.hardest {
            let verdict = match record.outcome {
                Outcome::Won => "won".green(),
                Outcome::Lost => "lost".red(),
            };
            println!(
                "   {:<12} {} with {} misses in {} guesses",
                record.word.to_uppercase(),
                verdict,
                record.wrong_guesses,
                record.total_guesses
            );
        }
    }
    println!();
}
