//! Serve blackjack games over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use blackjack_duel::options::GameOptions;
use blackjack_duel::records::{JsonFileRecords, OutcomeSink};
use blackjack_duel::server::{AppState, router};
use blackjack_duel::session::SessionStore;
use blackjack_duel::shoe::DEFAULT_DECKS;

const LOG_TARGET: &str = "bin::blackjack_server";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "blackjack-server")]
#[command(about = "Launch the blackjack session API server", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to (host:port)
    #[arg(long, env = "BLACKJACK_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// JSON file finished games are recorded in
    #[arg(long, env = "BLACKJACK_RECORDS", default_value = "./db.json")]
    records: PathBuf,

    /// Number of decks in each game's shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = DEFAULT_DECKS)]
    decks: u8,

    /// Seconds a game may sit idle before it is dropped
    #[arg(long, env = "BLACKJACK_SESSION_TTL_SECS", default_value_t = 30 * 60)]
    session_ttl_secs: u64,

    /// Toggle structured (JSON) logs
    #[arg(long, env = "BLACKJACK_LOG_JSON", default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json);

    let options = GameOptions::default().with_decks(args.decks).with_countdown(0);
    options.validate().context("invalid game configuration")?;

    let records = JsonFileRecords::new(&args.records);
    let records_path = records.path().display().to_string();
    let sink: Arc<dyn OutcomeSink> = Arc::new(records);
    let sessions = Arc::new(SessionStore::new(sink));
    let reaper = sessions.spawn_reaper(Duration::from_secs(args.session_ttl_secs));

    let app = router(AppState::new(sessions, options));
    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;

    info!(
        target: LOG_TARGET,
        addr = %args.bind,
        records = %records_path,
        "server is running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    reaper.abort();
    info!(target: LOG_TARGET, "server stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::fmt().with_env_filter(filter).with_target(false);

    if json {
        builder.json().flatten_event(true).init();
    } else {
        builder.compact().init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!(target: LOG_TARGET, "received shutdown signal");
}
