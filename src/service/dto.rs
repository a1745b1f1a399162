//! JSON bodies exchanged with the HTTP service

use crate::core::Mark;
use crate::game::Session;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedGame {
    pub game_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedGame {
    pub player_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub marks: Vec<Mark>,
    pub has_won: bool,
    pub is_over: bool,
    pub turns_used: usize,
    pub max_turns: usize,
    /// Present only once the game is over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl GuessResponse {
    #[must_use]
    pub fn from_session(game: &impl Session) -> Self {
        Self {
            marks: game
                .last_marks()
                .map(|pattern| pattern.marks().to_vec())
                .unwrap_or_default(),
            has_won: game.has_won(),
            is_over: game.is_over(),
            turns_used: game.turns_used(),
            max_turns: game.max_turns(),
            answer: revealed_answer(game),
        }
    }
}

/// Progress of one game, or of one player's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Uuid>,
    pub turns_used: usize,
    pub max_turns: usize,
    pub has_won: bool,
    pub is_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl GameState {
    #[must_use]
    pub fn for_game(game_id: Uuid, game: &impl Session) -> Self {
        Self {
            game_id: Some(game_id),
            ..Self::from_session(game)
        }
    }

    #[must_use]
    pub fn for_player(player_id: Uuid, game: &impl Session) -> Self {
        Self {
            player_id: Some(player_id),
            ..Self::from_session(game)
        }
    }

    fn from_session(game: &impl Session) -> Self {
        Self {
            game_id: None,
            player_id: None,
            turns_used: game.turns_used(),
            max_turns: game.max_turns(),
            has_won: game.has_won(),
            is_over: game.is_over(),
            answer: revealed_answer(game),
        }
    }
}

fn revealed_answer(game: &impl Session) -> Option<String> {
    if game.is_over() {
        game.answer().map(|word| word.text().to_string())
    } else {
        None
    }
}
