//! Errors raised by game sessions

use crate::core::WordError;
use thiserror::Error;

/// Why a session rejected an operation
///
/// A rejected guess never changes session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed guess, or a word outside the word list
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Guess submitted to a session that is already over
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
