//! Hangman - CLI
//!
//! Terminal Hangman with TUI and line modes, plus an automatic-play simulator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulateConfig, run_simple, run_simulation},
    core::{LANGUAGES, Word},
    logging::init_tracing,
    output::print_simulation_result,
    solver::GuesserType,
    wordlists::{RandomWords, WORDS, loader::words_from_slice},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman: keep the programming world safe from Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible word draws
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Guesser: candidates (default), frequency, random
        #[arg(short, long, default_value = "candidates")]
        guesser: String,
    },
}

/// Load the word list selected by `--words`
fn load_words(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    use hangman::wordlists::loader::load_from_file;

    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        bail!("word list contains no valid words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let words = load_words(cli.words.as_ref())?;
    info!(words = words.len(), seed = ?cli.seed, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => {
            let mut source = RandomWords::with_seed(words, cli.seed)?;
            run_simple(&mut source, LANGUAGES)
        }
        Commands::Simulate { count, guesser } => {
            run_simulate_command(count, &guesser, &words, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<Word>, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let source = RandomWords::with_seed(words, seed)?;
    let app = App::new(source, LANGUAGES);
    run_tui(app)
}

fn run_simulate_command(count: usize, guesser_name: &str, words: &[Word], seed: Option<u64>) {
    let guesser = GuesserType::from_name(guesser_name, words);
    println!(
        "Simulating {count} games with the {} guesser...",
        guesser.name()
    );

    let config = SimulateConfig {
        seed,
        ..SimulateConfig::new(count)
    };
    let result = run_simulation(&guesser, words, LANGUAGES, &config);
    print_simulation_result(&result, guesser.name());
}
