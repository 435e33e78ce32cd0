//! HTTP router tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use blackjack_duel::server::{AppState, DECK_EMPTY_MESSAGE, router};
use blackjack_duel::{
    Card, Game, GameOptions, MemoryRecords, OutcomeSink, Rank, SessionStore, Shoe, Suit,
};

fn app() -> (Router, AppState) {
    let sink: Arc<dyn OutcomeSink> = Arc::new(MemoryRecords::new());
    let state = AppState::new(Arc::new(SessionStore::new(sink)), GameOptions::default());
    (router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn start_game_returns_id_and_concealed_view() {
    let (app, state) = app();
    let (status, body) = get(&app, "/start-game?playerName=Ada").await;

    assert_eq!(status, StatusCode::OK);
    let id = body["gameID"].as_str().unwrap();
    assert_eq!(id.len(), 10);
    assert_eq!(body["result"]["playerHand"].as_array().unwrap().len(), 2);
    assert_eq!(body["result"]["dealerHand"][0], json!({ "value": "?", "suit": "?" }));
    assert_eq!(state.sessions.len().await, 1);
}

#[tokio::test]
async fn start_game_requires_player_name() {
    let (app, _) = app();
    let (status, body) = get(&app, "/start-game").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/start-game?playerName=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn player_move_validates_parameters() {
    let (app, _) = app();
    let (status, _) = get(&app, "/player-move?gameID=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/player-move?move=hit").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/player-move?gameID=abc&move=fold").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/player-move?gameID=abc&move=hit").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_round_is_recorded() {
    let (app, state) = app();
    let (_, start) = get(&app, "/start-game?playerName=Ada").await;
    let id = start["gameID"].as_str().unwrap().to_owned();

    let (status, body) = get(&app, &format!("/player-move?gameID={id}&move=stay")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["isGameOver"], true);
    assert!(body["result"]["winner"]["result"].is_string());
    assert!(body["result"].get("drawnCard").is_none());
    assert!(state.sessions.is_empty().await);

    let (status, games) = get(&app, "/games").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(games["version"], 1);
    assert_eq!(games["games"][id.as_str()]["outcome"], body["result"]["winner"]);

    let (status, _) = get(&app, &format!("/player-move?gameID={id}&move=hit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hit_reports_drawn_card() {
    let (app, state) = app();
    let mut game = Game::with_shoe(
        GameOptions::default(),
        Shoe::stacked(&[
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Clubs),
        ]),
    );
    game.deal_initial().unwrap();
    let id = state.sessions.insert(game).await;

    let (status, body) = get(&app, &format!("/player-move?gameID={id}&move=hit")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "result": {
                "isGameOver": false,
                "drawnCard": { "value": "4", "suit": "Clubs" }
            }
        })
    );
}

#[tokio::test]
async fn empty_deck_drops_the_game() {
    let (app, state) = app();
    let mut game = Game::with_shoe(
        GameOptions::default(),
        Shoe::stacked(&[
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
        ]),
    );
    game.deal_initial().unwrap();
    let id = state.sessions.insert(game).await;

    let (status, body) = get(&app, &format!("/player-move?gameID={id}&move=hit")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": DECK_EMPTY_MESSAGE }));
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn generate_cards_returns_one_card() {
    let (app, _) = app();
    let (status, body) = get(&app, "/generate-cards").await;
    assert_eq!(status, StatusCode::OK);
    let card: Card = serde_json::from_value(body["card"].clone()).unwrap();
    assert!(Rank::ALL.contains(&card.rank));
}
