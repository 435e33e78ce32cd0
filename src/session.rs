//! In-memory sessions, one game each.
//!
//! Each session sits behind its own lock, so at most one action is in flight
//! per session while other sessions proceed. The map lock is only held to
//! look up, insert or remove entries. Finished and exhausted games are
//! evicted; finished ones are handed to the [`OutcomeSink`] first.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::{ActionError, SessionError};
use crate::game::{ActionResult, Game, PlayerAction, TableView};
use crate::options::GameOptions;
use crate::records::OutcomeSink;
use crate::result::Outcome;

const LOG_TARGET: &str = "blackjack_duel::session";

/// Length of generated session ids.
pub const SESSION_ID_LEN: usize = 10;

const REAPER_INTERVAL: Duration = Duration::from_secs(60);

/// Identifier handed to clients for a running game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a random alphanumeric id.
    #[must_use]
    pub fn generate() -> Self {
        let id = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A game in progress and when it was last touched.
#[derive(Debug)]
struct Session {
    game: Game,
    last_active: Instant,
}

type SharedSession = Arc<Mutex<Session>>;

impl Session {
    fn new(game: Game) -> SharedSession {
        Arc::new(Mutex::new(Self {
            game,
            last_active: Instant::now(),
        }))
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    fn is_idle(&self, ttl: Duration) -> bool {
        self.last_active.elapsed() > ttl
    }
}

/// A freshly started game.
#[derive(Debug, Clone)]
pub struct NewGame {
    /// Id to submit actions under.
    pub session_id: SessionId,
    /// The table after the initial deal, dealer's first card face down.
    pub view: TableView,
}

/// Store of running games keyed by [`SessionId`].
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SharedSession>>,
    sink: Arc<dyn OutcomeSink>,
}

impl SessionStore {
    /// Creates an empty store that reports finished games to `sink`.
    pub fn new(sink: Arc<dyn OutcomeSink>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            sink,
        }
    }

    /// Returns the sink finished games are reported to.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn OutcomeSink> {
        &self.sink
    }

    /// Starts a new game, deals the initial cards and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ShoeExhausted`] if the configured shoe cannot
    /// cover the initial deal.
    pub async fn create_game(&self, options: GameOptions) -> Result<NewGame, SessionError> {
        let mut game = Game::new(options, rand::random());
        game.deal_initial()?;
        let view = game.concealed_view();
        let session_id = self.insert(game).await;

        Ok(NewGame { session_id, view })
    }

    /// Stores a game under a fresh id and returns the id.
    pub async fn insert(&self, game: Game) -> SessionId {
        let mut sessions = self.sessions.write().await;
        let session_id = loop {
            let candidate = SessionId::generate();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        sessions.insert(session_id.clone(), Session::new(game));

        info!(
            target: LOG_TARGET,
            session_id = %session_id,
            total_sessions = sessions.len(),
            "created game session"
        );

        session_id
    }

    /// Applies a player action to a stored game.
    ///
    /// A game that ends with this action is recorded and evicted. A game whose
    /// shoe is empty is evicted without a record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSession`] if no game is stored under
    /// `id`, [`SessionError::ShoeExhausted`] if the shoe ran out, and
    /// [`SessionError::Action`] if the engine rejected the action.
    pub async fn submit_action(
        &self,
        id: &SessionId,
        action: PlayerAction,
    ) -> Result<ActionResult, SessionError> {
        let shared = self.sessions.read().await.get(id).cloned().ok_or_else(|| {
            debug!(target: LOG_TARGET, session_id = %id, "session not found");
            SessionError::UnknownSession
        })?;

        let result = {
            let mut session = shared.lock().await;
            // A concurrent action may have ended the game while this one waited.
            if session.game.is_over() {
                return Err(SessionError::UnknownSession);
            }
            session.touch();

            if session.game.cards_remaining() == 0 {
                self.evict(id).await;
                warn!(target: LOG_TARGET, session_id = %id, "shoe empty, session evicted");
                return Err(SessionError::ShoeExhausted);
            }

            match session.game.apply(action) {
                Ok(result) => {
                    if result.is_over {
                        self.evict(id).await;
                    }
                    result
                }
                Err(ActionError::ShoeExhausted) => {
                    self.evict(id).await;
                    warn!(
                        target: LOG_TARGET,
                        session_id = %id,
                        "shoe ran out mid-action, session evicted"
                    );
                    return Err(SessionError::ShoeExhausted);
                }
                Err(err) => return Err(err.into()),
            }
        };

        debug!(
            target: LOG_TARGET,
            session_id = %id,
            %action,
            is_over = result.is_over,
            "action applied"
        );

        if let Some(outcome) = &result.outcome {
            self.persist(id, outcome.clone()).await;
        }

        Ok(result)
    }

    /// Drops a session from the map. The caller may still hold its lock.
    async fn evict(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Hands a finished game to the sink. Failures are logged, never returned.
    async fn persist(&self, id: &SessionId, outcome: Outcome) {
        let sink = Arc::clone(&self.sink);
        let session_id = id.clone();
        let written =
            tokio::task::spawn_blocking(move || sink.record(session_id.as_str(), &outcome)).await;

        match written {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                error!(target: LOG_TARGET, session_id = %id, error = %err, "failed to record game");
            }
            Err(err) => {
                error!(target: LOG_TARGET, session_id = %id, error = %err, "record task failed");
            }
        }
    }

    /// Returns the concealed or full view of a stored game.
    pub async fn view(&self, id: &SessionId) -> Option<TableView> {
        let shared = self.sessions.read().await.get(id).cloned()?;
        let session = shared.lock().await;
        Some(session.game.view())
    }

    /// Removes a session without recording it.
    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.evict(id).await;
        if removed {
            info!(target: LOG_TARGET, session_id = %id, "removed game session");
        }
        removed
    }

    /// Returns the number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns whether no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops sessions untouched for longer than `ttl`. Returns how many went.
    ///
    /// A session whose lock is held has an action in flight and is kept.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, shared| {
            let idle = shared
                .try_lock()
                .is_ok_and(|session| session.is_idle(ttl));
            if idle {
                debug!(target: LOG_TARGET, session_id = %id, "evicting idle session");
            }
            !idle
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(
                target: LOG_TARGET,
                evicted,
                remaining = sessions.len(),
                "cleaned up idle sessions"
            );
        }
        evicted
    }

    /// Spawns a task that evicts idle sessions once a minute.
    pub fn spawn_reaper(self: &Arc<Self>, ttl: Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        info!(
            target: LOG_TARGET,
            ttl_secs = ttl.as_secs(),
            interval_secs = REAPER_INTERVAL.as_secs(),
            "session reaper started"
        );
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(REAPER_INTERVAL);
            loop {
                interval.tick().await;
                store.evict_idle(ttl).await;
            }
        })
    }
}
