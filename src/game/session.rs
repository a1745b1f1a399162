//! Session capability shared by both game engines
//!
//! Defines the [`Session`] trait and the [`Game`] enum that selects an engine
//! at runtime while keeping static dispatch.

use super::{AdaptiveGame, GameError, PlainGame};
use crate::core::{Pattern, Word, WordList};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Standard Wordle turn budget
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Operations every game session supports
pub trait Session {
    /// Submit a guess
    ///
    /// Returns whether this guess won the game.
    ///
    /// # Errors
    /// - `GameError::InvalidState` if the session is already over
    /// - `GameError::InvalidArgument` if the word is not 5 letters or not in
    ///   the word list
    fn guess(&mut self, word: &str) -> Result<bool, GameError>;

    fn has_won(&self) -> bool;

    fn turns_used(&self) -> usize;

    fn max_turns(&self) -> usize;

    /// Marks from the most recent guess, `None` before the first one
    fn last_marks(&self) -> Option<Pattern>;

    /// The answer, revealed only once the session is over
    fn answer(&self) -> Option<&Word>;

    /// Won, or out of turns
    fn is_over(&self) -> bool {
        self.has_won() || self.turns_used() >= self.max_turns()
    }
}

/// Check a raw guess against the session state and word list
pub(super) fn validate_guess(
    session: &impl Session,
    words: &WordList,
    raw: &str,
) -> Result<Word, GameError> {
    if session.is_over() {
        return Err(GameError::InvalidState("game over".to_string()));
    }

    let word = Word::new(raw.trim())?;
    if !words.contains(&word) {
        return Err(GameError::InvalidArgument(format!(
            "'{word}' is not in the word list"
        )));
    }

    Ok(word)
}

/// Check constructor arguments shared by both engines
pub(super) fn validate_setup(max_turns: usize, words: &WordList) -> Result<(), GameError> {
    if max_turns == 0 {
        return Err(GameError::InvalidArgument(
            "max turns must be at least 1".to_string(),
        ));
    }
    if words.is_empty() {
        return Err(GameError::InvalidArgument("word list is empty".to_string()));
    }
    Ok(())
}

/// Which engine a new game should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Fixed random answer
    #[default]
    Plain,
    /// Adaptive adversary
    Cheat,
}

impl GameMode {
    /// Create a mode from its name
    ///
    /// "cheat" (any case) selects the adaptive engine; anything else is plain.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("cheat") {
            Self::Cheat
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Cheat => "cheat",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A game of either kind
pub enum Game {
    Plain(PlainGame),
    Adaptive(AdaptiveGame),
}

impl Game {
    /// Start a fresh game of the given mode
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` for a zero turn budget or an empty
    /// word list.
    pub fn new<R: Rng + ?Sized>(
        mode: GameMode,
        max_turns: usize,
        words: Arc<WordList>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        match mode {
            GameMode::Plain => PlainGame::new(max_turns, words, rng).map(Self::Plain),
            GameMode::Cheat => AdaptiveGame::new(max_turns, words).map(Self::Adaptive),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Plain(_) => GameMode::Plain,
            Self::Adaptive(_) => GameMode::Cheat,
        }
    }
}

impl Session for Game {
    fn guess(&mut self, word: &str) -> Result<bool, GameError> {
        match self {
            Self::Plain(g) => g.guess(word),
            Self::Adaptive(g) => g.guess(word),
        }
    }

    fn has_won(&self) -> bool {
        match self {
            Self::Plain(g) => g.has_won(),
            Self::Adaptive(g) => g.has_won(),
        }
    }

    fn turns_used(&self) -> usize {
        match self {
            Self::Plain(g) => g.turns_used(),
            Self::Adaptive(g) => g.turns_used(),
        }
    }

    fn max_turns(&self) -> usize {
        match self {
            Self::Plain(g) => g.max_turns(),
            Self::Adaptive(g) => g.max_turns(),
        }
    }

    fn last_marks(&self) -> Option<Pattern> {
        match self {
            Self::Plain(g) => g.last_marks(),
            Self::Adaptive(g) => g.last_marks(),
        }
    }

    fn answer(&self) -> Option<&Word> {
        match self {
            Self::Plain(g) => g.answer(),
            Self::Adaptive(g) => g.answer(),
        }
    }
}
