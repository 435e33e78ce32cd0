use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, ParseActionError};
use crate::result::Outcome;

use super::{Game, GameState, LOG_TARGET};

/// A decision the player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// Keep the hand and let the dealer play.
    Stand,
}

impl PlayerAction {
    /// Wire and prompt spelling of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stay",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerAction {
    type Err = ParseActionError;

    /// Accepts exactly `hit` or `stay`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stay" => Ok(Self::Stand),
            other => Err(ParseActionError(other.to_owned())),
        }
    }
}

/// What a single player action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Whether the round ended with this action.
    pub is_over: bool,
    /// The card the player drew, for a hit.
    pub drawn_card: Option<Card>,
    /// The round's outcome, once it is over.
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round immediately; the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not to act or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            self.state = GameState::PlayerBust;
            debug!(
                target: LOG_TARGET,
                player_value = self.player_hand.value(),
                "player bust"
            );
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The dealer plays out their hand and the round is scored.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not to act or the shoe runs out while
    /// the dealer draws.
    pub fn stand(&mut self) -> Result<Outcome, ActionError> {
        self.ensure_player_turn()?;

        self.state = GameState::DealerTurn;
        self.dealer_play()?;
        self.state = GameState::Complete;

        Ok(self.determine_winner())
    }

    /// Applies a player decision and reports what changed.
    ///
    /// # Errors
    ///
    /// See [`Game::hit`] and [`Game::stand`].
    pub fn apply(&mut self, action: PlayerAction) -> Result<ActionResult, ActionError> {
        match action {
            PlayerAction::Hit => {
                let card = self.hit()?;
                let outcome = self.state.has_outcome().then(|| self.determine_winner());
                Ok(ActionResult {
                    is_over: self.is_over(),
                    drawn_card: Some(card),
                    outcome,
                })
            }
            PlayerAction::Stand => {
                let outcome = self.stand()?;
                Ok(ActionResult {
                    is_over: true,
                    drawn_card: None,
                    outcome: Some(outcome),
                })
            }
        }
    }
}
