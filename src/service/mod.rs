//! Multiplayer game bookkeeping
//!
//! Rooms are addressed by ids minted here; each player who joins a room plays
//! an independent game of the configured mode.

pub mod dto;
mod error;
mod game_service;

pub use error::ServiceError;
pub use game_service::GameService;
