//! Property tests for scoring, winner determination and dealer play.

use proptest::prelude::*;

use blackjack_duel::{
    ActionError, Card, Game, GameOptions, Rank, Suit, Verdict, score_hand,
};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn hand_and_permutation() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    prop::collection::vec(any_card(), 0..12)
        .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
}

proptest! {
    #[test]
    fn score_ignores_card_order((hand, permuted) in hand_and_permutation()) {
        prop_assert_eq!(score_hand(&hand), score_hand(&permuted));
    }

    #[test]
    fn score_counts_each_ace_at_least_once(hand in prop::collection::vec(any_card(), 0..12)) {
        let hard: u32 = hand
            .iter()
            .map(|card| card.rank.fixed_value().map_or(1, u32::from))
            .sum();
        let score = score_hand(&hand);
        prop_assert!(score >= hard);
        let aces = hand.iter().filter(|c| c.rank == Rank::Ace).count() as u32;
        prop_assert!(score - hard <= 10 * aces);
    }

    #[test]
    fn verdict_follows_priority(player in 0u32..40, dealer in 0u32..40) {
        let verdict = Verdict::decide(player, dealer);
        if player > 21 {
            prop_assert_eq!(verdict, Verdict::DealerWins);
        } else if dealer > 21 {
            prop_assert_eq!(verdict, Verdict::PlayerWins);
        } else if player == dealer {
            prop_assert_eq!(verdict, Verdict::Draw);
        } else {
            prop_assert_eq!(verdict == Verdict::PlayerWins, player > dealer);
            prop_assert_ne!(verdict, Verdict::Draw);
        }
    }

    #[test]
    fn dealer_play_halts_at_seventeen_or_exhaustion(seed in any::<u64>(), decks in 1u8..3) {
        let mut game = Game::new(GameOptions::default().with_decks(decks), seed);
        game.deal_initial().unwrap();
        let dealt = game.dealer_hand().len();

        match game.stand() {
            Ok(_) => {
                prop_assert!(game.dealer_hand().value() >= 17);
                prop_assert!(game.dealer_hand().len() > dealt);
            }
            Err(err) => prop_assert_eq!(err, ActionError::ShoeExhausted),
        }
        prop_assert!(game.is_over());
    }

    #[test]
    fn concealed_view_reveals_one_dealer_card(seed in any::<u64>()) {
        let mut game = Game::new(GameOptions::default(), seed);
        game.deal_initial().unwrap();

        let view = game.concealed_view();
        prop_assert_eq!(view.hidden_count(), 1);
        prop_assert!(view.dealer_hand[0].is_hidden());
        prop_assert_eq!(view.dealer_hand.len() - view.hidden_count(), 1);
    }
}
