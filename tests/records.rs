//! Record store tests.

use std::fs;
use std::path::PathBuf;

use blackjack_duel::records::RECORD_VERSION;
use blackjack_duel::{
    Card, JsonFileRecords, MemoryRecords, Outcome, OutcomeSink, Rank, RecordBook, RecordError,
    Suit,
};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "blackjack-duel-{}-{name}.json",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

fn sample_outcome() -> Outcome {
    Outcome::PlayerWins(vec![
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Spades),
    ])
}

#[test]
fn missing_file_reads_as_empty() {
    let records = JsonFileRecords::new(temp_path("missing"));
    let book = records.load().unwrap();
    assert_eq!(book, RecordBook::default());
    assert_eq!(book.version, RECORD_VERSION);
}

#[test]
fn records_accumulate_across_writes() {
    let path = temp_path("accumulate");
    let records = JsonFileRecords::new(&path);

    records.record("abc", &sample_outcome()).unwrap();
    records.record("def", &Outcome::Draw(Vec::new())).unwrap();

    let book = records.load().unwrap();
    assert_eq!(book.games.len(), 2);
    assert_eq!(book.games["abc"].outcome, sample_outcome());

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 1);
    assert_eq!(raw["games"]["abc"]["outcome"]["result"], "player_wins");
    assert!(raw["games"]["def"]["timestamp"].is_string());

    let _ = fs::remove_file(path);
}

#[test]
fn corrupt_file_is_replaced_on_next_write() {
    let path = temp_path("corrupt");
    fs::write(&path, "{ not json").unwrap();
    let records = JsonFileRecords::new(&path);

    assert!(records.load().unwrap().games.is_empty());

    records.record("xyz", &sample_outcome()).unwrap();
    let book = records.load().unwrap();
    assert_eq!(book.games.len(), 1);
    assert!(book.games.contains_key("xyz"));

    let _ = fs::remove_file(path);
}

#[test]
fn unknown_version_is_rejected_by_parse() {
    let err = RecordBook::parse(r#"{ "version": 9, "games": {} }"#).unwrap_err();
    assert!(matches!(err, RecordError::UnsupportedVersion(9)));

    let path = temp_path("version");
    fs::write(&path, r#"{ "version": 9, "games": {} }"#).unwrap();
    assert!(JsonFileRecords::new(&path).load().unwrap().games.is_empty());
    let _ = fs::remove_file(path);
}

#[test]
fn memory_records_keep_latest_outcome_per_id() {
    let records = MemoryRecords::new();
    records.record("same", &Outcome::Draw(Vec::new())).unwrap();
    records.record("same", &sample_outcome()).unwrap();

    let book = records.load().unwrap();
    assert_eq!(book.games.len(), 1);
    assert_eq!(book.games["same"].outcome, sample_outcome());
}
