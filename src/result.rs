//! Round result types.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::BLACKJACK;

/// Final result of a round, carrying the hand that decided it.
///
/// A draw carries the player's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "hand", rename_all = "snake_case")]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWins(Vec<Card>),
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWins(Vec<Card>),
    /// Equal totals.
    Draw(Vec<Card>),
}

impl Outcome {
    /// Returns the hand attached to the outcome.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        match self {
            Self::PlayerWins(hand) | Self::DealerWins(hand) | Self::Draw(hand) => hand,
        }
    }

    /// Returns which side the outcome favors.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        match self {
            Self::PlayerWins(_) => Verdict::PlayerWins,
            Self::DealerWins(_) => Verdict::DealerWins,
            Self::Draw(_) => Verdict::Draw,
        }
    }
}

/// Outcome without the hand attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Player wins.
    PlayerWins,
    /// Dealer wins.
    DealerWins,
    /// Equal totals.
    Draw,
}

impl Verdict {
    /// Decides a round from the two totals.
    ///
    /// In priority order: a player bust loses, a dealer bust wins, equal
    /// totals draw, otherwise the higher total wins. Every pair of totals maps
    /// to exactly one verdict.
    #[must_use]
    pub const fn decide(player_total: u32, dealer_total: u32) -> Self {
        if player_total > BLACKJACK {
            Self::DealerWins
        } else if dealer_total > BLACKJACK {
            Self::PlayerWins
        } else if player_total == dealer_total {
            Self::Draw
        } else if player_total > dealer_total {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }
}
