//! Terminal table tests.

use std::io::Cursor;
use std::time::Duration;

use blackjack_duel::render::{render_card, render_hand};
use blackjack_duel::terminal::{PROMPT, REPROMPT, Terminal};
use blackjack_duel::{
    Card, ConfigError, Game, GameOptions, HiddenCard, Outcome, Rank, Shoe, Suit, TerminalError,
    ViewCard,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn play(draws: &[Card], countdown: i64, input: &str) -> (Result<Outcome, TerminalError>, String) {
    let options = GameOptions::default()
        .with_countdown(countdown)
        .with_player_name("Ada");
    let game = Game::with_shoe(options, Shoe::stacked(draws));
    let mut output = Vec::new();
    let result = Terminal::new(game, Cursor::new(input.as_bytes()), &mut output)
        .unwrap()
        .with_tick(Duration::ZERO)
        .play_round();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn round_plays_to_the_end_and_reprompts_on_bad_input() {
    let draws = [
        card(Rank::Five, Suit::Hearts), // player
        card(Rank::Ten, Suit::Clubs), // dealer
        card(Rank::Six, Suit::Spades), // player
        card(Rank::Seven, Suit::Diamonds), // dealer
        card(Rank::Three, Suit::Hearts), // player hit (14)
        card(Rank::Two, Suit::Clubs), // dealer draw (19)
    ];
    let (result, output) = play(&draws, 2, "fold\nHIT\nhit\nstay\n");

    let outcome = result.unwrap();
    assert!(matches!(outcome, Outcome::DealerWins(ref hand) if hand.len() == 3));

    assert!(output.starts_with("2...\n1...\n0...\n"));
    assert_eq!(output.matches(REPROMPT).count(), 2);
    assert_eq!(output.matches(PROMPT).count(), 4);
    assert!(output.contains("Ada Hand"));
    assert!(output.contains("Dealer Hand"));
    assert!(output.contains("|?       |"));
    assert!(output.contains("Dealer wins. (14 vs dealer 19)"));
}

#[test]
fn bust_ends_round_without_another_prompt() {
    let draws = [
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
    ];
    let (result, output) = play(&draws, 0, "hit\n");

    assert!(matches!(result.unwrap(), Outcome::DealerWins(_)));
    assert_eq!(output.matches(PROMPT).count(), 1);
    assert!(output.contains("(25 vs dealer 17)"));
}

#[test]
fn empty_shoe_is_fatal() {
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Two, Suit::Diamonds),
    ];
    let (result, _) = play(&draws, 0, "hit\n");
    let err = result.unwrap_err();
    assert!(matches!(err, TerminalError::ShoeExhausted));
    assert!(err.to_string().contains("increase the number of decks"));
}

#[test]
fn closed_input_stops_the_round() {
    let draws = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Two, Suit::Diamonds),
    ];
    let (result, _) = play(&draws, 0, "maybe\n");
    assert!(matches!(result.unwrap_err(), TerminalError::InputClosed));
}

#[test]
fn negative_countdown_is_rejected_up_front() {
    let game = Game::new(GameOptions::default().with_countdown(-2), 3);
    let result = Terminal::new(game, Cursor::new(Vec::new()), Vec::new());
    assert!(matches!(
        result,
        Err(TerminalError::Config(ConfigError::NegativeCountdown(-2)))
    ));
}

#[test]
fn card_glyph_layout() {
    let ten = render_card(&ViewCard::from(card(Rank::Ten, Suit::Hearts)));
    let lines: Vec<&str> = ten.lines().collect();
    assert_eq!(
        lines,
        [
            "||||||||||",
            "|10      |",
            "|♥       |",
            "|        |",
            "|      10|",
            "|       ♥|",
            "||||||||||",
        ]
    );

    let queen = render_card(&ViewCard::from(card(Rank::Queen, Suit::Spades)));
    assert!(queen.contains("|Q       |"));
    assert!(queen.contains("|       Q|"));
    assert!(queen.contains("|♠       |"));

    let hidden = render_card(&ViewCard::Hidden(HiddenCard));
    assert_eq!(hidden.matches('?').count(), 4);

    let hand = render_hand(&[
        ViewCard::Hidden(HiddenCard),
        ViewCard::from(card(Rank::Ace, Suit::Clubs)),
    ]);
    assert!(hand.contains("|A       |"));
    assert!(hand.contains("|♣       |"));
}
