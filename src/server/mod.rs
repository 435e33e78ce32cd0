//! HTTP surface over the session store.
//!
//! Routes mirror the game lifecycle: `GET /start-game` deals a new game,
//! `GET /player-move` plays one action, `GET /games` lists finished games and
//! `GET /generate-cards` returns a random card.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::options::GameOptions;
use crate::session::SessionStore;

mod dto;
mod error;
mod handlers;
mod logging;

pub use error::ApiError;
pub use handlers::DECK_EMPTY_MESSAGE;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Running games.
    pub sessions: Arc<SessionStore>,
    /// Options new games start from; the player name is set per request.
    pub options: GameOptions,
}

impl AppState {
    /// Creates handler state from a store and base options.
    pub const fn new(sessions: Arc<SessionStore>, options: GameOptions) -> Self {
        Self { sessions, options }
    }
}

/// Builds the router with request logging applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/start-game", get(handlers::start_game))
        .route("/player-move", get(handlers::player_move))
        .route("/generate-cards", get(handlers::generate_card))
        .route("/games", get(handlers::list_games))
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(state)
}
