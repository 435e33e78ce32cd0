use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::game::{ActionResult, TableView};
use crate::records::RecordBook;
use crate::result::Outcome;
use crate::session::SessionId;

/// Query of `GET /start-game`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameQuery {
    pub player_name: Option<String>,
}

/// Body of a successful `GET /start-game`.
#[derive(Debug, Serialize)]
pub struct StartGameResponse {
    #[serde(rename = "gameID")]
    pub game_id: SessionId,
    pub result: TableView,
}

/// Query of `GET /player-move`.
#[derive(Debug, Deserialize)]
pub struct PlayerMoveQuery {
    #[serde(rename = "gameID")]
    pub game_id: Option<String>,
    #[serde(rename = "move")]
    pub action: Option<String>,
}

/// What one move did to the game.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDto {
    pub is_game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn_card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Outcome>,
}

impl From<ActionResult> for MoveDto {
    fn from(result: ActionResult) -> Self {
        Self {
            is_game_over: result.is_over,
            drawn_card: result.drawn_card,
            winner: result.outcome,
        }
    }
}

/// Body of `GET /player-move`: either the move result or a status message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PlayerMoveResponse {
    Moved { result: MoveDto },
    Status { message: String },
}

/// Body of `GET /generate-cards`.
#[derive(Debug, Serialize)]
pub struct RandomCardResponse {
    pub card: Card,
}

/// Body of `GET /games`.
pub type RecordsResponse = RecordBook;
