//! TUI application state and logic

use crate::core::{Game, KEYBOARD_ROWS, Language, Outcome, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a, S: WordSource> {
    pub game: Game<'a>,
    pub source: S,
    pub cursor: Cursor,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Highlighted key on the on-screen keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Letter under the cursor
    #[must_use]
    pub fn letter(self) -> Option<char> {
        KEYBOARD_ROWS.get(self.row)?.chars().nth(self.col)
    }

    /// Wraps horizontally, clamps the column when changing rows
    #[must_use]
    pub fn moved(self, direction: KeyCode) -> Self {
        let row_len = |row: usize| KEYBOARD_ROWS[row].len();
        match direction {
            KeyCode::Left => Self {
                col: (self.col + row_len(self.row) - 1) % row_len(self.row),
                ..self
            },
            KeyCode::Right => Self {
                col: (self.col + 1) % row_len(self.row),
                ..self
            },
            KeyCode::Up if self.row > 0 => {
                let row = self.row - 1;
                Self {
                    row,
                    col: self.col.min(row_len(row) - 1),
                }
            }
            KeyCode::Down if self.row + 1 < KEYBOARD_ROWS.len() => {
                let row = self.row + 1;
                Self {
                    row,
                    col: self.col.min(row_len(row) - 1),
                }
            }
            _ => self,
        }
    }
}

/// Results of the current session, not persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            Outcome::Lost => self.current_streak = 0,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

impl<'a, S: WordSource> App<'a, S> {
    #[must_use]
    pub fn new(mut source: S, lives: &'a [Language]) -> Self {
        let game = Game::start(&mut source, lives);

        Self {
            game,
            source,
            cursor: Cursor::default(),
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Press a letter key. Disabled keys do nothing.
    pub fn press(&mut self, letter: char) {
        if self.game.guess(letter)
            && let Some(outcome) = self.game.outcome()
        {
            self.stats.record(outcome);
        }
    }

    /// Only available once the current game is over
    pub fn new_game(&mut self) {
        if !self.game.is_over() {
            return;
        }
        self.game.start_new_game(&mut self.source);
        self.cursor = Cursor::default();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = self.cursor.moved(key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.is_over() {
                    self.new_game();
                } else if let Some(letter) = self.cursor.letter() {
                    self.press(letter);
                }
            }
            KeyCode::Char('n' | 'N') if self.game.is_over() => {
                self.new_game();
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.press(c);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    info!("interactive session started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        played = app.stats.games_played,
        won = app.stats.games_won,
        "interactive session ended"
    );
    Ok(())
}
