use serde::Serialize;

use crate::card::{HiddenCard, ViewCard};

use super::Game;

/// Both hands as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// The player's cards.
    pub player_hand: Vec<ViewCard>,
    /// The dealer's cards, possibly with the first one face down.
    pub dealer_hand: Vec<ViewCard>,
}

impl TableView {
    /// Number of face-down cards in the dealer's hand.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.dealer_hand.iter().filter(|card| card.is_hidden()).count()
    }
}

impl Game {
    /// Both hands exactly as held.
    #[must_use]
    pub fn full_view(&self) -> TableView {
        TableView {
            player_hand: self.player_hand.cards().iter().copied().map(ViewCard::from).collect(),
            dealer_hand: self.dealer_hand.cards().iter().copied().map(ViewCard::from).collect(),
        }
    }

    /// Both hands with the dealer's first card face down.
    #[must_use]
    pub fn concealed_view(&self) -> TableView {
        let mut view = self.full_view();
        if let Some(first) = view.dealer_hand.first_mut() {
            *first = ViewCard::Hidden(HiddenCard);
        }
        view
    }

    /// The view appropriate to the round: concealed while it is live, full
    /// once it is over.
    #[must_use]
    pub fn view(&self) -> TableView {
        if self.is_over() {
            self.full_view()
        } else {
            self.concealed_view()
        }
    }
}
