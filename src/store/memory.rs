//! In-memory score store.
//!
//! The log is an `im::Vector`, so a read takes the lock only long enough
//! to clone the persistent structure (O(1)) and then reduces over the
//! snapshot without blocking writers. `export`/`import` give a bincode
//! snapshot codec for handing the log to whatever owns real durability.

use std::sync::RwLock;

use im::Vector;

use crate::core::PlayerId;
use crate::score::{rank_players, LeaderboardEntry, ScoreRecord};

use super::score::{ScoreStore, StoreError};

/// Append-only score log held in memory.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: RwLock<Vector<ScoreRecord>>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from an exported snapshot.
    pub fn import(bytes: &[u8]) -> Result<Self, StoreError> {
        let records: Vec<ScoreRecord> = bincode::deserialize(bytes)?;
        Ok(Self {
            records: RwLock::new(records.into_iter().collect()),
        })
    }

    /// Serialize the whole log for durable handoff.
    pub fn export(&self) -> Result<Vec<u8>, StoreError> {
        let snapshot = self.snapshot();
        let records: Vec<ScoreRecord> = snapshot.iter().copied().collect();
        Ok(bincode::serialize(&records)?)
    }

    /// Number of records on the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// O(1) clone of the current log.
    fn snapshot(&self) -> Vector<ScoreRecord> {
        self.records.read().expect("score log lock poisoned").clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn save(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().expect("score log lock poisoned");
        records.push_back(record);
        log::debug!(
            "recorded {} attempts for {} (log size {})",
            record.attempts,
            record.player,
            records.len()
        );
        Ok(())
    }

    fn for_player(&self, player: PlayerId) -> Result<Vec<ScoreRecord>, StoreError> {
        // Append order is completion order, so this is already oldest first.
        Ok(self
            .snapshot()
            .iter()
            .filter(|r| r.player == player)
            .copied()
            .collect())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let snapshot = self.snapshot();
        Ok(rank_players(snapshot.iter(), limit))
    }
}
