use tracing::debug;

use crate::error::ActionError;
use crate::result::{Outcome, Verdict};

use super::{Game, GameState, LOG_TARGET};

/// Dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u32 = 17;

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer always takes one card after the initial deal, then keeps
    /// drawing while the hand scores below 17. Soft and hard 17 both stand.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::GameOver);
        }

        let mut drawn = 0usize;
        loop {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            drawn += 1;
            if self.dealer_hand.value() >= DEALER_STANDS_ON {
                break;
            }
        }

        debug!(
            target: LOG_TARGET,
            dealer_value = self.dealer_hand.value(),
            soft = self.dealer_hand.is_soft(),
            drawn,
            "dealer finished drawing"
        );

        Ok(())
    }

    /// Scores the round from the current hands.
    ///
    /// A player bust always goes to the dealer, even if the dealer's hand would
    /// also be over 21.
    #[must_use]
    pub fn determine_winner(&self) -> Outcome {
        match Verdict::decide(self.player_hand.value(), self.dealer_hand.value()) {
            Verdict::PlayerWins => Outcome::PlayerWins(self.player_hand.cards().to_vec()),
            Verdict::DealerWins => Outcome::DealerWins(self.dealer_hand.cards().to_vec()),
            Verdict::Draw => Outcome::Draw(self.player_hand.cards().to_vec()),
        }
    }
}
