//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Initial cards have not been dealt yet.
    #[error("initial cards have not been dealt")]
    NotStarted,
    /// Initial cards were already dealt.
    #[error("initial cards were already dealt")]
    AlreadyDealt,
    /// The round is over; hands can no longer change.
    #[error("the round is over")]
    GameOver,
    /// The shoe ran out of cards mid-round.
    #[error("no cards left in the shoe")]
    ShoeExhausted,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::ShoeExhausted => Self::ShoeExhausted,
        }
    }
}

/// An action string that is neither `hit` nor `stay`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action `{0}`, expected `hit` or `stay`")]
pub struct ParseActionError(pub String);

/// Errors in game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The countdown before dealing is negative.
    #[error("countdown is given in seconds and must not be below zero (got {0})")]
    NegativeCountdown(i64),
    /// The shoe would contain no decks.
    #[error("the shoe needs at least one deck")]
    NoDecks,
}

/// Errors returned by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session exists under the given id.
    #[error("unknown session")]
    UnknownSession,
    /// The session's shoe ran out; the session was evicted.
    #[error("deck is empty")]
    ShoeExhausted,
    /// The engine rejected the action.
    #[error(transparent)]
    Action(ActionError),
}

impl From<ActionError> for SessionError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::ShoeExhausted => Self::ShoeExhausted,
            other => Self::Action(other),
        }
    }
}

/// Errors raised while reading or writing game records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record file could not be read or written.
    #[error("record store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The record file could not be encoded or decoded.
    #[error("record store JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    /// The record file carries a schema version this build does not know.
    #[error("unsupported record schema version {0}")]
    UnsupportedVersion(u32),
}

/// Errors that end a terminal game.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input reached end of file before the round finished.
    #[error("input closed before the round finished")]
    InputClosed,
    /// The shoe ran out during the round.
    #[error(
        "the deck became empty before the game ended; increase the number of decks to account for the player count"
    )]
    ShoeExhausted,
    /// The game options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The engine rejected an action.
    #[error(transparent)]
    Action(ActionError),
}

impl From<ActionError> for TerminalError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::ShoeExhausted => Self::ShoeExhausted,
            other => Self::Action(other),
        }
    }
}
