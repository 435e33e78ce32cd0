//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Shoe is shuffled, nobody holds cards yet.
    WaitingForDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Player went over 21; the dealer did not draw.
    PlayerBust,
    /// Dealer finished drawing; the round can be scored.
    Complete,
    /// The shoe ran out mid-round. No outcome exists.
    Aborted,
}

impl GameState {
    /// Returns whether the round has ended, for any reason.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::PlayerBust | Self::Complete | Self::Aborted)
    }

    /// Returns whether the round ended with a scoreable outcome.
    #[must_use]
    pub const fn has_outcome(self) -> bool {
        matches!(self, Self::PlayerBust | Self::Complete)
    }
}
