//! Player and dealer hand representations.

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Scores a set of cards.
///
/// Non-ace cards are summed first. Each ace then counts 11 if that keeps the
/// running total at or below 21, otherwise 1.
#[must_use]
pub fn score_hand(cards: &[Card]) -> u32 {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        match card.rank.fixed_value() {
            Some(points) => value += u32::from(points),
            None => aces += 1,
        }
    }

    while aces > 0 && value + 11 <= BLACKJACK {
        value += 11;
        aces -= 1;
    }
    value + aces
}

/// Cards held by the player or the dealer, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        score_hand(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let hard: u32 = self
            .cards
            .iter()
            .map(|card| card.rank.fixed_value().map_or(1, u32::from))
            .sum();
        self.cards.iter().any(|card| card.rank == Rank::Ace) && self.value() != hard
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
