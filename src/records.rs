//! Durable record of finished games.
//!
//! Records live in a single JSON document keyed by session id. Every write
//! reads the whole document, inserts one entry and writes it back; writers are
//! serialized inside one process, nothing protects against a second process
//! writing the same file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::RecordError;
use crate::result::Outcome;
use crate::sync::Mutex;

const LOG_TARGET: &str = "blackjack_duel::records";

/// Schema version written to new record files.
pub const RECORD_VERSION: u32 = 1;

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// How the round ended.
    pub outcome: Outcome,
    /// When the round ended.
    pub timestamp: DateTime<Utc>,
}

/// Every recorded game, keyed by session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBook {
    /// Schema version of the document.
    pub version: u32,
    /// Records by session id.
    pub games: BTreeMap<String, GameRecord>,
}

impl Default for RecordBook {
    fn default() -> Self {
        Self {
            version: RECORD_VERSION,
            games: BTreeMap::new(),
        }
    }
}

impl RecordBook {
    /// Parses a record document.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Json`] for malformed JSON and
    /// [`RecordError::UnsupportedVersion`] for an unknown schema version.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let book: Self = serde_json::from_str(text)?;
        if book.version != RECORD_VERSION {
            return Err(RecordError::UnsupportedVersion(book.version));
        }
        Ok(book)
    }
}

/// Destination for finished games.
pub trait OutcomeSink: Send + Sync {
    /// Records the outcome of the game played under `session_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be stored.
    fn record(&self, session_id: &str, outcome: &Outcome) -> Result<(), RecordError>;

    /// Returns every recorded game.
    ///
    /// # Errors
    ///
    /// Returns an error if the records could not be read.
    fn load(&self) -> Result<RecordBook, RecordError>;
}

/// Records kept in a JSON file on disk.
pub struct JsonFileRecords {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRecords {
    /// Creates a sink backed by the file at `path`. The file is created on the
    /// first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, treating a missing or corrupt file as empty.
    fn read_or_empty(&self) -> Result<RecordBook, RecordError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    target: LOG_TARGET,
                    path = %self.path.display(),
                    "record file missing, starting empty"
                );
                return Ok(RecordBook::default());
            }
            Err(err) => return Err(err.into()),
        };

        match RecordBook::parse(&text) {
            Ok(book) => Ok(book),
            Err(err) => {
                warn!(
                    target: LOG_TARGET,
                    path = %self.path.display(),
                    error = %err,
                    "record file unreadable, treating as empty"
                );
                Ok(RecordBook::default())
            }
        }
    }
}

impl OutcomeSink for JsonFileRecords {
    fn record(&self, session_id: &str, outcome: &Outcome) -> Result<(), RecordError> {
        let _guard = self.write_lock.lock();

        let mut book = self.read_or_empty()?;
        book.games.insert(
            session_id.to_owned(),
            GameRecord {
                outcome: outcome.clone(),
                timestamp: Utc::now(),
            },
        );
        fs::write(&self.path, serde_json::to_vec(&book)?)?;

        info!(
            target: LOG_TARGET,
            session_id,
            total_records = book.games.len(),
            "game record written"
        );
        Ok(())
    }

    fn load(&self) -> Result<RecordBook, RecordError> {
        self.read_or_empty()
    }
}

/// Records kept in memory only.
#[derive(Default)]
pub struct MemoryRecords {
    book: Mutex<RecordBook>,
}

impl MemoryRecords {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutcomeSink for MemoryRecords {
    fn record(&self, session_id: &str, outcome: &Outcome) -> Result<(), RecordError> {
        self.book.lock().games.insert(
            session_id.to_owned(),
            GameRecord {
                outcome: outcome.clone(),
                timestamp: Utc::now(),
            },
        );
        Ok(())
    }

    fn load(&self) -> Result<RecordBook, RecordError> {
        Ok(self.book.lock().clone())
    }
}
