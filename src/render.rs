//! ASCII-art card glyphs for the terminal table.

use core::fmt::Write as _;

use crate::card::{Suit, ViewCard};
use crate::game::TableView;

const EDGE: &str = "||||||||||";

const fn suit_icon(suit: Suit) -> char {
    match suit {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::Spades => '♠',
    }
}

fn face(card: &ViewCard) -> (&'static str, char) {
    match card {
        ViewCard::Hidden(_) => ("?", '?'),
        ViewCard::Shown(card) => (card.rank.abbreviation(), suit_icon(card.suit)),
    }
}

/// Renders one card as a fixed-width glyph.
///
/// The rank reads from the top-left corner and again, right-aligned, from the
/// bottom-right, each followed or preceded by the suit icon.
///
/// ```
/// use blackjack_duel::card::{Card, Rank, Suit, ViewCard};
/// use blackjack_duel::render::render_card;
///
/// let glyph = render_card(&ViewCard::from(Card::new(Rank::Ten, Suit::Hearts)));
/// assert!(glyph.lines().nth(1).unwrap().starts_with("|10"));
/// ```
#[must_use]
pub fn render_card(card: &ViewCard) -> String {
    let (rank, icon) = face(card);
    [
        EDGE.to_owned(),
        format!("|{rank:<2}      |"),
        format!("|{icon}       |"),
        "|        |".to_owned(),
        format!("|      {rank:>2}|"),
        format!("|       {icon}|"),
        EDGE.to_owned(),
    ]
    .join("\n")
}

/// Renders cards one glyph after another, separated by blank lines.
#[must_use]
pub fn render_hand(cards: &[ViewCard]) -> String {
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders both hands under headings, the player's first.
#[must_use]
pub fn render_table(player_name: &str, view: &TableView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{player_name} Hand");
    let _ = writeln!(out, "{}", render_hand(&view.player_hand));
    let _ = writeln!(out, "\nDealer Hand");
    let _ = writeln!(out, "{}", render_hand(&view.dealer_hand));
    out
}
