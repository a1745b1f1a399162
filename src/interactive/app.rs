//! TUI application state and logic

use crate::config::{GameConfig, make_rng};
use crate::core::{Pattern, WORD_LENGTH, WordList};
use crate::game::{Game, GameError, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;

/// Application state
pub struct App {
    pub config: GameConfig,
    words: Arc<WordList>,
    rng: StdRng,
    pub game: Game,
    pub rows: Vec<Row>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// One submitted guess on the board
#[derive(Debug, Clone)]
pub struct Row {
    pub guess: String,
    pub pattern: Pattern,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a game.
    pub fn new(
        config: GameConfig,
        words: Arc<WordList>,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut rng = make_rng(seed);
        let game = Game::new(config.mode, config.max_turns, Arc::clone(&words), &mut rng)?;

        let mut app = Self {
            config,
            words,
            rng,
            game,
            rows: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the word in {} tries. Type and press Enter.", config.max_turns),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        match Game::new(
            self.config.mode,
            self.config.max_turns,
            Arc::clone(&self.words),
            &mut self.rng,
        ) {
            Ok(game) => {
                self.game = game;
                self.rows.clear();
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the typed word as a guess
    pub fn submit(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message(
                &format!("Word must be exactly {WORD_LENGTH} letters!"),
                MessageStyle::Error,
            );
            return;
        }

        let guess = self.input_buffer.clone();
        match self.game.guess(&guess) {
            Ok(won) => {
                if let Some(pattern) = self.game.last_marks() {
                    self.rows.push(Row { guess, pattern });
                }
                self.input_buffer.clear();

                if won {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    let celebration = match self.game.turns_used() {
                        1 => "HOLE IN ONE!".to_string(),
                        n => format!("Solved in {n} guesses!"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else if self.game.is_over() {
                    self.stats.total_games += 1;
                    let answer = self
                        .game
                        .answer()
                        .map_or_else(|| "?".to_string(), |word| word.text().to_uppercase());
                    self.add_message(
                        &format!("Out of turns! The word was {answer}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.is_over() => match key.code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => {
                if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::game::GameMode;
    use crate::wordlists::loader::words_from_slice;

    fn new_app(mode: GameMode, max_turns: usize) -> App {
        let words = Arc::new(WordList::new(words_from_slice(&["panic", "buggy", "manic"])));
        App::new(GameConfig::new(mode, max_turns), words, Some(3)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_edits_the_buffer() {
        let mut app = new_app(GameMode::Cheat, 6);
        for c in ['P', 'a', '1', 'n', 'i', 'c', 'x'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "panic");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "pani");
    }

    #[test]
    fn short_word_is_not_submitted() {
        let mut app = new_app(GameMode::Cheat, 6);
        type_word(&mut app, "pan");

        assert!(app.rows.is_empty());
        assert_eq!(app.game.turns_used(), 0);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn rejected_word_keeps_buffer() {
        let mut app = new_app(GameMode::Cheat, 6);
        type_word(&mut app, "zzzzz");

        assert!(app.rows.is_empty());
        assert_eq!(app.input_buffer, "zzzzz");
    }

    #[test]
    fn guesses_fill_rows_until_win() {
        let mut app = new_app(GameMode::Cheat, 6);
        type_word(&mut app, "panic");
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].pattern.marks(), [Mark::Miss; 5]);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "buggy");
        assert!(app.game.has_won());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn new_game_only_after_game_over() {
        let mut app = new_app(GameMode::Cheat, 1);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_buffer, "n");
        press(&mut app, KeyCode::Backspace);

        type_word(&mut app, "panic");
        assert!(app.game.is_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.game.is_over());
        assert!(app.rows.is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = new_app(GameMode::Plain, 6);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app(GameMode::Plain, 6);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
