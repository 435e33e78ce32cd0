//! A player-versus-dealer blackjack engine.
//!
//! The crate provides a [`Game`] type that runs one round: shuffled
//! multi-deck shoe, initial deal, hit/stand decisions, dealer play and
//! scoring. Around it sit a terminal table ([`terminal`]), a session store
//! ([`session`]) with a durable record of finished games ([`records`]), and an
//! axum HTTP surface ([`server`]).
//!
//! # Example
//!
//! ```
//! use blackjack_duel::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal_initial().unwrap();
//! let outcome = game.stand().unwrap();
//! assert!(game.is_over());
//! assert!(!outcome.hand().is_empty());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod records;
pub mod render;
pub mod result;
pub mod server;
pub mod session;
pub mod shoe;
mod sync;
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, HiddenCard, Rank, Suit, ViewCard};
pub use error::{
    ActionError, ConfigError, DealError, ParseActionError, RecordError, SessionError,
    TerminalError,
};
pub use game::{ActionResult, Game, GameState, PlayerAction, TableView};
pub use hand::{Hand, score_hand};
pub use options::GameOptions;
pub use records::{GameRecord, JsonFileRecords, MemoryRecords, OutcomeSink, RecordBook};
pub use result::{Outcome, Verdict};
pub use session::{SessionId, SessionStore};
pub use shoe::Shoe;
