//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;
mod view;

pub use actions::{ActionResult, PlayerAction};
pub use dealer::DEALER_STANDS_ON;
pub use state::GameState;
pub use view::TableView;

const LOG_TARGET: &str = "blackjack_duel::game";

/// Number of cards the initial deal takes from the shoe.
pub const INITIAL_DEAL: usize = 4;

/// One round of blackjack between a single player and the dealer.
///
/// The game owns the shoe and both hands. Every mutation goes through
/// `&mut self`, so a caller holding the game has exclusive access for the
/// duration of an action.
#[derive(Debug, Clone)]
pub struct Game {
    shoe: Shoe,
    options: GameOptions,
    state: GameState,
    player_hand: Hand,
    dealer_hand: Hand,
}

impl Game {
    /// Creates a new game whose shoe is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_duel::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(options.decks, &mut rng);
        Self::with_shoe(options, shoe)
    }

    /// Creates a new game that deals from the given shoe as-is.
    #[must_use]
    pub const fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            shoe,
            options,
            state: GameState::WaitingForDeal,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
        }
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::AlreadyDealt`] if cards were dealt before, or
    /// [`ActionError::ShoeExhausted`] if the shoe holds fewer than four cards.
    /// In the latter case the game is aborted and the shoe is left untouched.
    pub fn deal_initial(&mut self) -> Result<(), ActionError> {
        if self.state != GameState::WaitingForDeal {
            return Err(ActionError::AlreadyDealt);
        }
        if self.shoe.len() < INITIAL_DEAL {
            self.state = GameState::Aborted;
            return Err(ActionError::ShoeExhausted);
        }

        for _ in 0..2 {
            self.player_hand.add_card(self.shoe.deal()?);
            self.dealer_hand.add_card(self.shoe.deal()?);
        }
        self.state = GameState::PlayerTurn;

        debug!(
            target: LOG_TARGET,
            player_value = self.player_hand.value(),
            cards_remaining = self.shoe.len(),
            "initial cards dealt"
        );
        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Draws a card, aborting the round if the shoe is empty.
    fn draw(&mut self) -> Result<crate::card::Card, ActionError> {
        self.shoe.deal().map_err(|err| {
            debug!(target: LOG_TARGET, state = ?self.state, "shoe exhausted mid-round");
            self.state = GameState::Aborted;
            ActionError::from(err)
        })
    }

    /// Fails unless the player is to act.
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            GameState::PlayerTurn => Ok(()),
            GameState::WaitingForDeal => Err(ActionError::NotStarted),
            _ => Err(ActionError::GameOver),
        }
    }
}
