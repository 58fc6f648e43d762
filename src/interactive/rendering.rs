//! TUI rendering with ratatui
//!
//! Draws the board: status banner, lives, word slots and the on-screen keyboard.

use super::app::App;
use crate::core::{Game, KEYBOARD_ROWS, KeyState, Rgb, Slot, Status, WordSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const CREAM: Color = Color::Rgb(0xF9, 0xF4, 0xDA);
const SKY: Color = Color::Rgb(0x27, 0xAA, 0xE1);

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Tagline
            Constraint::Length(4), // Status banner
            Constraint::Length(4), // Lives
            Constraint::Length(3), // Word
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // New game
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tagline(f, &app.game, chunks[1]);
    render_status(f, &app.game, chunks[2]);
    render_lives(f, &app.game, chunks[3]);
    render_word(f, &app.game, chunks[4]);
    render_keyboard(f, app, chunks[5]);
    render_new_game(f, &app.game, chunks[6]);
    render_status_bar(f, app, chunks[8]);
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("HANG", Style::default().fg(CREAM)),
        Span::styled("MAN", Style::default().fg(SKY)),
    ]);
    let header = Paragraph::new(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(SKY)),
        );
    f.render_widget(header, area);
}

fn render_tagline(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let tagline = Paragraph::new(format!(
        "Guess the word in under {} attempts to keep the programming world safe from Assembly!",
        game.max_lives()
    ))
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(tagline, area);
}

fn render_status(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let Some(status) = game.status() else {
        return;
    };

    let background = match status {
        Status::Farewell(_) => Color::Magenta,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let mut lines = vec![Line::from(Span::styled(
        status.title().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = status.subtitle() {
        lines.push(Line::from(subtitle));
    }

    let banner = Paragraph::new(lines)
        .style(Style::default().fg(CREAM).bg(background))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Thick));
    f.render_widget(banner, area);
}

fn render_lives(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let wrong = game.wrong_guess_count();
    let mut spans = Vec::with_capacity(game.lives().len() * 2);

    for (index, language) in game.lives().iter().enumerate() {
        let span = if crate::core::derive::is_life_lost(index, wrong) {
            Span::styled(
                format!(" 💀 {} ", language.name),
                Style::default()
                    .fg(Color::DarkGray)
                    .bg(Color::Black)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            Span::styled(
                format!(" {} ", language.name),
                Style::default()
                    .fg(color(language.color))
                    .bg(color(language.background_color)),
            )
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    let lives = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Lives {}/{} ", game.remaining_lives(), game.max_lives()))
                .borders(Borders::TOP),
        );
    f.render_widget(lives, area);
}

fn render_word(f: &mut Frame, game: &Game<'_>, area: Rect) {
    let slot_style = Style::default()
        .bg(Color::Rgb(0x32, 0x32, 0x32))
        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);

    let mut spans = Vec::new();
    for slot in game.slots() {
        let span = match slot {
            Slot::Hidden => Span::styled("   ", slot_style),
            Slot::Revealed(letter) => Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                slot_style.fg(Color::White),
            ),
            Slot::Missed(letter) => Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                slot_style.fg(Color::Red),
            ),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    spans.pop();

    let word = Paragraph::new(vec![Line::default(), Line::from(spans)]).alignment(Alignment::Center);
    f.render_widget(word, area);
}

fn key_style(state: KeyState, enabled: bool, selected: bool) -> Style {
    let mut style = match state {
        KeyState::Unguessed => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyState::Correct => Style::default().fg(Color::White).bg(Color::Green),
        KeyState::Wrong => Style::default().fg(Color::White).bg(Color::Red),
    }
    .add_modifier(Modifier::BOLD);

    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn render_keyboard<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let game = &app.game;
    let selected = app.cursor.letter();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.chars() {
                // The cursor is hidden while every key is locked
                let is_selected = !game.is_over() && selected == Some(letter);
                let style = key_style(
                    game.key_state(letter),
                    game.is_key_enabled(letter),
                    is_selected,
                );
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_new_game(f: &mut Frame, game: &Game<'_>, area: Rect) {
    if !game.is_over() {
        return;
    }

    let button = Paragraph::new(Span::styled(
        " New game ",
        Style::default()
            .fg(CREAM)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().title(" Enter ").borders(Borders::ALL));

    let width = 20.min(area.width);
    let centered = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    f.render_widget(button, centered);
}

fn render_status_bar<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = &app.stats;
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.game.is_over() {
        "Enter/n: New Game | Esc: Quit"
    } else {
        "a-z: Guess | Arrows+Enter: Keyboard | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, Word};
    use ratatui::{Terminal, backend::TestBackend};

    struct Fixed(&'static str);

    impl WordSource for Fixed {
        fn next_word(&mut self) -> Word {
            Word::new(self.0).unwrap()
        }
    }

    fn draw(app: &App<'_, Fixed>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn fresh_board() {
        let app = App::new(Fixed("react"), LANGUAGES);
        let screen = draw(&app);

        assert!(screen.contains("HANGMAN"));
        assert!(screen.contains("under 8 attempts"));
        assert!(screen.contains("TypeScript"));
        assert!(screen.contains("Lives 8/8"));
        assert!(!screen.contains("New game"));
        assert!(!screen.contains("💀"));
    }

    #[test]
    fn wrong_guess_shows_farewell_and_skull() {
        let mut app = App::new(Fixed("react"), LANGUAGES);
        app.press('z');
        let screen = draw(&app);

        assert!(screen.contains("Farewell, HTML"));
        assert!(screen.contains("💀"));
        assert!(screen.contains("Lives 7/8"));
    }

    #[test]
    fn win_shows_banner_and_new_game() {
        let mut app = App::new(Fixed("react"), LANGUAGES);
        for letter in "react".chars() {
            app.press(letter);
        }
        let screen = draw(&app);

        assert!(screen.contains("You win!"));
        assert!(screen.contains("Well done!"));
        assert!(screen.contains("New game"));
        assert!(screen.contains("Enter/n: New Game"));
    }

    #[test]
    fn loss_reveals_word() {
        let mut app = App::new(Fixed("react"), LANGUAGES);
        for letter in "bdfghijk".chars() {
            app.press(letter);
        }
        let screen = draw(&app);

        assert!(screen.contains("You lost!"));
        assert!(screen.contains("Better start learning Assembly!"));
        assert!(screen.contains("Games: 1 | Win Rate: 0%"));
    }

    #[test]
    fn key_styles() {
        let style = key_style(KeyState::Wrong, false, false);
        assert_eq!(style.bg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::DIM));

        let style = key_style(KeyState::Unguessed, true, true);
        assert_eq!(style.bg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
