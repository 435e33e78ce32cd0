//! The multi-deck shoe cards are dealt from.

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Default number of decks in a shoe.
pub const DEFAULT_DECKS: u8 = 6;

/// An ordered stack of cards. Dealing takes from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds an unshuffled shoe of `decks` standard decks.
    ///
    /// Cards are generated suit-major, rank-minor, one deck after another.
    #[must_use]
    pub fn build(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Builds a shoe of `decks` decks and shuffles it with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut shoe = Self::build(decks);
        shoe.shuffle(rng);
        shoe
    }

    /// Creates a shoe from an explicit card order. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a shoe that deals `draws` in the given order.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the shoe in place with a Fisher–Yates pass.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ShoeExhausted`] if the shoe is empty.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::ShoeExhausted)
    }

    /// Returns the cards left, in shoe order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
