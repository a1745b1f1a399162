//! HTTP client for the game service and the two-player duel built on it

mod duel;

pub use duel::{DuelOutcome, run_duel};

use crate::server::PLAYER_ID_HEADER;
use crate::service::dto::{
    CreatedGame, ErrorBody, GameState, GuessRequest, GuessResponse, JoinedGame,
};
use reqwest::{Client, Response, StatusCode};
use std::io;
use thiserror::Error;
use uuid::Uuid;

/// Default server address used by the duel
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What the server made of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted(GuessResponse),
    /// The guess was refused as malformed or unknown; the message says why
    Rejected(String),
}

/// Thin typed wrapper over the service's HTTP routes
pub struct ArenaClient {
    http: Client,
    base: String,
}

impl ArenaClient {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// # Errors
    /// Returns an error if the request fails or the server refuses it.
    pub async fn create_game(&self) -> Result<Uuid, ClientError> {
        let response = self.http.post(self.url("/games")).send().await?;
        let created: CreatedGame = checked(response).await?.json().await?;
        Ok(created.game_id)
    }

    /// # Errors
    /// Returns an error if the request fails or the game does not exist.
    pub async fn join_game(&self, game_id: Uuid) -> Result<Uuid, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/games/{game_id}/join")))
            .send()
            .await?;
        let joined: JoinedGame = checked(response).await?.json().await?;
        Ok(joined.player_id)
    }

    /// Submit a guess for a player
    ///
    /// A `400 Bad Request` comes back as [`GuessOutcome::Rejected`]; any other
    /// failure status is an error.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// status other than success or bad request.
    pub async fn submit_guess(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        guess: &str,
    ) -> Result<GuessOutcome, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/games/{game_id}/guesses")))
            .header(PLAYER_ID_HEADER, player_id.to_string())
            .json(&GuessRequest {
                guess: guess.to_string(),
            })
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Ok(GuessOutcome::Rejected(error_message(response).await));
        }

        let accepted: GuessResponse = checked(response).await?.json().await?;
        Ok(GuessOutcome::Accepted(accepted))
    }

    /// # Errors
    /// Returns an error if the request fails or the game does not exist.
    pub async fn progress(&self, game_id: Uuid) -> Result<Vec<GameState>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/games/{game_id}/progress")))
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }
}

async fn checked(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let message = error_message(response).await;
        Err(ClientError::Status { status, message })
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    response.json::<ErrorBody>().await.map_or_else(
        |_| status.canonical_reason().unwrap_or("unknown error").to_string(),
        |body| body.message,
    )
}
