//! Errors raised by the game service

use crate::game::GameError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Unknown game or player id
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Game(#[from] GameError),
}
