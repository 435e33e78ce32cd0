use axum::Json;
use axum::extract::{Query, State};
use tracing::{info, warn};

use crate::card::Card;
use crate::error::SessionError;
use crate::game::PlayerAction;
use crate::session::SessionId;

use super::AppState;
use super::dto::{
    MoveDto, PlayerMoveQuery, PlayerMoveResponse, RandomCardResponse, RecordsResponse,
    StartGameQuery, StartGameResponse,
};
use super::error::ApiError;

const LOG_TARGET: &str = "blackjack_duel::server::handlers";

/// Status message returned when a session's shoe ran out.
pub const DECK_EMPTY_MESSAGE: &str = "Deck is empty.";

/// GET /start-game?playerName= - deal a new game
pub async fn start_game(
    State(state): State<AppState>,
    Query(query): Query<StartGameQuery>,
) -> Result<Json<StartGameResponse>, ApiError> {
    let player_name = match query.player_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::bad_request("playerName is required")),
    };

    let options = state.options.clone().with_player_name(player_name);
    let game = state.sessions.create_game(options).await?;

    info!(target: LOG_TARGET, game_id = %game.session_id, "game started");

    Ok(Json(StartGameResponse {
        game_id: game.session_id,
        result: game.view,
    }))
}

/// GET /player-move?gameID=&move= - hit or stay
pub async fn player_move(
    State(state): State<AppState>,
    Query(query): Query<PlayerMoveQuery>,
) -> Result<Json<PlayerMoveResponse>, ApiError> {
    let (Some(game_id), Some(action)) = (query.game_id, query.action) else {
        return Err(ApiError::bad_request("Missing parameters"));
    };
    let action: PlayerAction = action.parse()?;
    let game_id = SessionId::from(game_id);

    match state.sessions.submit_action(&game_id, action).await {
        Ok(result) => Ok(Json(PlayerMoveResponse::Moved {
            result: MoveDto::from(result),
        })),
        Err(SessionError::ShoeExhausted) => {
            warn!(target: LOG_TARGET, game_id = %game_id, "deck empty, game dropped");
            Ok(Json(PlayerMoveResponse::Status {
                message: DECK_EMPTY_MESSAGE.to_owned(),
            }))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /generate-cards - one random card, not drawn from any shoe
pub async fn generate_card() -> Json<RandomCardResponse> {
    let card = Card::random(&mut rand::rng());
    Json(RandomCardResponse { card })
}

/// GET /games - every recorded game
pub async fn list_games(State(state): State<AppState>) -> Result<Json<RecordsResponse>, ApiError> {
    let sink = std::sync::Arc::clone(state.sessions.sink());
    let book = tokio::task::spawn_blocking(move || sink.load())
        .await
        .map_err(|e| ApiError::internal(format!("Task join error: {e}")))?
        .map_err(|e| ApiError::internal(format!("Failed to read records: {e}")))?;
    Ok(Json(book))
}
