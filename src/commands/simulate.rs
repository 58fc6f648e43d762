//! Simulate command
//!
//! Plays many games with an automatic guesser and collects statistics.

use crate::core::{Game, Language, Outcome, Word};
use crate::solver::Guesser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Options for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub count: usize,
    /// Base seed; game `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// How one simulated game went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: String,
    pub outcome: Outcome,
    pub wrong_guesses: usize,
    pub total_guesses: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_wrong: f64,
    /// Games per wrong guess count, indexed by count
    pub wrong_distribution: Vec<usize>,
    /// Losses first, then most wrong guesses
    pub hardest: Vec<GameRecord>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

/// Play a single game to the end
pub fn play_game<G: Guesser, R: Rng>(
    guesser: &G,
    word: Word,
    lives: &[Language],
    rng: &mut R,
) -> GameRecord {
    let mut game = Game::new(word, lives);

    while let Some(letter) = guesser.next_letter(&game, rng) {
        if !game.guess(letter) {
            break;
        }
    }

    GameRecord {
        word: game.word().text().to_string(),
        // A guesser that gives up early counts as a loss
        outcome: game.outcome().unwrap_or(Outcome::Lost),
        wrong_guesses: game.wrong_guess_count(),
        total_guesses: game.guesses().len(),
    }
}

/// Play `config.count` games on random words, in parallel
///
/// # Panics
///
/// Panics if `words` is empty while `config.count` is non-zero.
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    words: &[Word],
    lives: &[Language],
    config: &SimulateConfig,
) -> SimulationResult {
    let start = Instant::now();
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let word = words[rng.random_range(0..words.len())].clone();
            let record = play_game(guesser, word, lives, &mut rng);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("done");

    let result = summarize(records, lives, start.elapsed());
    info!(
        games = result.games,
        wins = result.wins,
        seed = base_seed,
        "simulation finished"
    );
    result
}

fn summarize(mut records: Vec<GameRecord>, lives: &[Language], duration: Duration) -> SimulationResult {
    let games = records.len();
    let wins = records
        .iter()
        .filter(|r| r.outcome == Outcome::Won)
        .count();

    let mut wrong_distribution = vec![0; crate::core::max_lives(lives) + 1];
    let mut total_wrong = 0;
    for record in &records {
        total_wrong += record.wrong_guesses;
        if let Some(slot) = wrong_distribution.get_mut(record.wrong_guesses) {
            *slot += 1;
        }
    }

    records.sort_by(|a, b| {
        (b.outcome == Outcome::Lost, b.wrong_guesses).cmp(&(a.outcome == Outcome::Lost, a.wrong_guesses))
    });
    records.truncate(5);

    SimulationResult {
        games,
        wins,
        losses: games - wins,
        average_wrong: if games == 0 {
            0.0
        } else {
            total_wrong as f64 / games as f64
        },
        wrong_distribution,
        hardest: records,
        duration,
    }
}
