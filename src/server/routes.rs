//! Route table and handlers

use super::ApiError;
use crate::service::GameService;
use crate::service::dto::{CreatedGame, GameState, GuessRequest, GuessResponse, JoinedGame};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use uuid::Uuid;

/// Header naming the player a guess is submitted for
pub const PLAYER_ID_HEADER: &str = "X-Player-Id";

type Shared = State<Arc<GameService>>;
type GameId = Result<Path<Uuid>, PathRejection>;

/// Build the API router over a shared service
pub fn router(service: Arc<GameService>) -> Router {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/{game_id}", get(game_state))
        .route("/games/{game_id}/join", post(join_game))
        .route("/games/{game_id}/guesses", post(submit_guess))
        .route("/games/{game_id}/progress", get(progress))
        .with_state(service)
}

async fn create_game(State(service): Shared) -> Result<Json<CreatedGame>, ApiError> {
    let game_id = service.create_game()?;
    Ok(Json(CreatedGame { game_id }))
}

async fn join_game(
    State(service): Shared,
    game_id: GameId,
) -> Result<Json<JoinedGame>, ApiError> {
    let Path(game_id) = game_id?;
    let player_id = service.join_game(game_id)?;
    Ok(Json(JoinedGame { player_id }))
}

async fn submit_guess(
    State(service): Shared,
    game_id: GameId,
    headers: HeaderMap,
    request: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, ApiError> {
    let Path(game_id) = game_id?;
    let player_id = player_id(&headers)?;
    let Json(request) = request?;
    let response = service.submit_guess(game_id, player_id, &request.guess)?;
    Ok(Json(response))
}

async fn progress(
    State(service): Shared,
    game_id: GameId,
) -> Result<Json<Vec<GameState>>, ApiError> {
    let Path(game_id) = game_id?;
    Ok(Json(service.progress(game_id)?))
}

async fn game_state(
    State(service): Shared,
    game_id: GameId,
) -> Result<Json<GameState>, ApiError> {
    let Path(game_id) = game_id?;
    Ok(Json(service.state(game_id)?))
}

fn player_id(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let value = headers
        .get(PLAYER_ID_HEADER)
        .ok_or_else(|| ApiError::BadRequest(format!("missing {PLAYER_ID_HEADER} header")))?;

    value
        .to_str()
        .ok()
        .and_then(|text| Uuid::parse_str(text.trim()).ok())
        .ok_or_else(|| ApiError::BadRequest(format!("malformed {PLAYER_ID_HEADER} header")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn player_id_header_is_parsed() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            PLAYER_ID_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );

        assert_eq!(player_id(&headers).unwrap(), id);
    }

    #[test]
    fn missing_or_malformed_header_is_bad_request() {
        let mut headers = HeaderMap::new();
        assert!(matches!(player_id(&headers), Err(ApiError::BadRequest(_))));

        headers.insert(PLAYER_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert!(matches!(player_id(&headers), Err(ApiError::BadRequest(_))));
    }
}
