//! Game sessions
//!
//! Two independent session types share the scorer and implement one
//! capability trait:
//! - [`PlainGame`] fixes its answer up front
//! - [`AdaptiveGame`] never commits to an answer until forced, always keeping
//!   the feedback least helpful to the player

mod adaptive;
mod error;
mod plain;
mod session;

pub use adaptive::AdaptiveGame;
pub use error::GameError;
pub use plain::PlainGame;
pub use session::{DEFAULT_MAX_TURNS, Game, GameMode, Session};
