//! Play one round of blackjack in the terminal.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use blackjack_duel::Game;
use blackjack_duel::options::{DEFAULT_COUNTDOWN, GameOptions};
use blackjack_duel::shoe::DEFAULT_DECKS;
use blackjack_duel::terminal::Terminal;

#[derive(Debug, Parser)]
#[command(name = "blackjack")]
#[command(about = "Play a round of blackjack against the dealer", long_about = None)]
struct Args {
    /// Name shown above your hand
    #[arg(long, default_value = "Player1")]
    name: String,

    /// Seconds to count down before dealing
    #[arg(long, default_value_t = DEFAULT_COUNTDOWN, allow_negative_numbers = true)]
    delay: i64,

    /// Number of decks in the shoe
    #[arg(long, default_value_t = DEFAULT_DECKS)]
    decks: u8,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let options = GameOptions::default()
        .with_player_name(args.name)
        .with_countdown(args.delay)
        .with_decks(args.decks);
    let seed = args.seed.unwrap_or_else(rand::random);
    let game = Game::new(options, seed);

    println!("Starting Blackjack game...");
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut terminal = Terminal::new(game, stdin, stdout).context("invalid game configuration")?;
    terminal.play_round().context("round aborted")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
