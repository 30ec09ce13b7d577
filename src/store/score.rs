//! Score persistence contract.
//!
//! The engine talks to durable storage through this trait only. The
//! in-crate [`MemoryScoreStore`](super::MemoryScoreStore) backs tests and
//! single-process deployments; a real deployment substitutes a
//! database-backed implementation of the same trait.

use thiserror::Error;

use crate::core::PlayerId;
use crate::score::{LeaderboardEntry, ScoreRecord};

/// Failure inside a score store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or lost the operation.
    #[error("score backend failure: {0}")]
    Backend(String),

    /// A snapshot could not be encoded or decoded.
    #[error("score snapshot codec failure: {0}")]
    Codec(#[from] bincode::Error),
}

/// Durable storage for completed rounds.
///
/// ## Implementation Notes
///
/// - `save` is append-only and must fail loudly: a silently dropped write
///   is a lost score, which the service treats as a request-fatal error
/// - `for_player` returns records oldest first
/// - `top_scores` returns rows ascending by best attempts, ties broken by
///   the earliest achievement of that best, then player id
pub trait ScoreStore: Send + Sync {
    /// Append one completed round.
    fn save(&self, record: ScoreRecord) -> Result<(), StoreError>;

    /// All completed rounds for one player, oldest first.
    fn for_player(&self, player: PlayerId) -> Result<Vec<ScoreRecord>, StoreError>;

    /// The best-round leaderboard, at most `limit` rows.
    fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError>;
}
