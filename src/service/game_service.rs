//! Room and player session storage

use super::ServiceError;
use super::dto::{GameState, GuessResponse};
use crate::config::{GameConfig, make_rng};
use crate::core::WordList;
use crate::game::{Game, GameError, Session};
use dashmap::DashMap;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// One player's own game inside a room
struct PlayerSession {
    player_id: Uuid,
    game: Game,
}

/// A multiplayer game: the host game plus everyone who joined
struct Room {
    host: Game,
    players: Vec<PlayerSession>,
}

/// Creates rooms, admits players and routes their guesses
///
/// Guesses hold the room's map entry while they run, so guesses within one
/// room are serialized while different rooms proceed independently.
pub struct GameService {
    config: GameConfig,
    words: Arc<WordList>,
    rooms: DashMap<Uuid, Room>,
    rng: Mutex<StdRng>,
}

impl GameService {
    /// Create a service; `seed` makes plain-mode answers reproducible
    #[must_use]
    pub fn new(config: GameConfig, words: Arc<WordList>, seed: Option<u64>) -> Self {
        Self {
            config,
            words,
            rooms: DashMap::new(),
            rng: Mutex::new(make_rng(seed)),
        }
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    fn new_game(&self) -> Result<Game, GameError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Game::new(
            self.config.mode,
            self.config.max_turns,
            Arc::clone(&self.words),
            &mut *rng,
        )
    }

    /// Open a new room and return its id
    ///
    /// # Errors
    /// Returns `ServiceError::Game` if the configuration cannot produce a game.
    pub fn create_game(&self) -> Result<Uuid, ServiceError> {
        let host = self.new_game()?;
        let game_id = Uuid::new_v4();
        self.rooms.insert(
            game_id,
            Room {
                host,
                players: Vec::new(),
            },
        );

        log::info!(
            "Created {} game {game_id} ({} words, {} turns)",
            self.config.mode,
            self.words.len(),
            self.config.max_turns
        );
        Ok(game_id)
    }

    /// Add a player to a room; the player gets a fresh game of its own
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the room does not exist.
    pub fn join_game(&self, game_id: Uuid) -> Result<Uuid, ServiceError> {
        let mut room = self
            .rooms
            .get_mut(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;
        let game = self.new_game()?;

        let player_id = Uuid::new_v4();
        room.players.push(PlayerSession { player_id, game });

        log::info!(
            "Player {player_id} joined game {game_id} ({} players)",
            room.players.len()
        );
        Ok(player_id)
    }

    /// Submit a guess on behalf of a player
    ///
    /// # Errors
    /// - `ServiceError::NotFound` for an unknown room or a player who has not
    ///   joined it
    /// - `ServiceError::Game` when the player's game rejects the guess
    pub fn submit_guess(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        guess: &str,
    ) -> Result<GuessResponse, ServiceError> {
        let mut room = self
            .rooms
            .get_mut(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;
        let session = room
            .players
            .iter_mut()
            .find(|session| session.player_id == player_id)
            .ok_or_else(|| ServiceError::NotFound(format!("player {player_id} not joined")))?;

        if let Err(err) = session.game.guess(guess) {
            log::debug!("Rejected guess '{guess}' from {player_id}: {err}");
            return Err(err.into());
        }

        let game = &session.game;
        if game.has_won() {
            log::info!(
                "Player {player_id} won game {game_id} in {} turns",
                game.turns_used()
            );
        } else if game.is_over() {
            log::info!("Player {player_id} ran out of turns in game {game_id}");
        }

        Ok(GuessResponse::from_session(game))
    }

    /// State of every player in a room, in join order
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the room does not exist.
    pub fn progress(&self, game_id: Uuid) -> Result<Vec<GameState>, ServiceError> {
        let room = self
            .rooms
            .get(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;

        Ok(room
            .players
            .iter()
            .map(|session| GameState::for_player(session.player_id, &session.game))
            .collect())
    }

    /// State of the room's host game
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the room does not exist.
    pub fn state(&self, game_id: Uuid) -> Result<GameState, ServiceError> {
        let room = self
            .rooms
            .get(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;

        Ok(GameState::for_game(game_id, &room.host))
    }
}

fn game_not_found(game_id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("game {game_id} not found"))
}
