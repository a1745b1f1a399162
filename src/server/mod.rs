//! HTTP transport for the game service
//!
//! Routes:
//! - `POST /games` creates a room
//! - `POST /games/{game_id}/join` adds a player
//! - `POST /games/{game_id}/guesses` submits a guess (player in `X-Player-Id`)
//! - `GET /games/{game_id}/progress` lists every player's state
//! - `GET /games/{game_id}` returns the room's host game state

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{PLAYER_ID_HEADER, router};

use crate::service::GameService;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serve the API on `bind` until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(bind: &str, service: Arc<GameService>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    run(listener, service).await
}

/// Serve the API on an already bound listener until Ctrl-C
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn run(listener: TcpListener, service: Arc<GameService>) -> anyhow::Result<()> {
    let config = service.config();
    log::info!(
        "Serving {} games ({} turns) on http://{}",
        config.mode,
        config.max_turns,
        listener.local_addr()?
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}
