//! Game configuration shared by every front end

use crate::game::{DEFAULT_MAX_TURNS, GameMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How new games are set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub max_turns: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(mode: GameMode, max_turns: usize) -> Self {
        Self { mode, max_turns }
    }

    /// Build a config from a mode name as given on the command line
    ///
    /// See [`GameMode::from_name`] for how names map to modes.
    #[must_use]
    pub fn from_name(mode: &str, max_turns: usize) -> Self {
        Self::new(GameMode::from_name(mode), max_turns)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::Plain, DEFAULT_MAX_TURNS)
    }
}

/// Random source for answer selection, reproducible when seeded
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
