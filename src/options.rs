//! Game configuration options.

use crate::error::ConfigError;
use crate::shoe::DEFAULT_DECKS;

/// Default countdown, in seconds, before the terminal table deals.
pub const DEFAULT_COUNTDOWN: i64 = 3;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_duel::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_countdown(0)
///     .with_player_name("Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Seconds counted down before the terminal table deals.
    ///
    /// Signed so that a misconfigured negative value can be reported rather
    /// than silently clamped.
    pub countdown: i64,
    /// Name shown above the player's hand.
    pub player_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            countdown: DEFAULT_COUNTDOWN,
            player_name: "Player1".to_owned(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_duel::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the countdown in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_duel::GameOptions;
    ///
    /// let options = GameOptions::default().with_countdown(1);
    /// assert_eq!(options.countdown, 1);
    /// ```
    #[must_use]
    pub fn with_countdown(mut self, seconds: i64) -> Self {
        self.countdown = seconds;
        self
    }

    /// Sets the player's display name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Checks the options for values no game can run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCountdown`] for a negative countdown and
    /// [`ConfigError::NoDecks`] for an empty shoe.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown < 0 {
            return Err(ConfigError::NegativeCountdown(self.countdown));
        }
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        Ok(())
    }
}
