//! Durable record of a completed round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One completed round, as handed to the score store.
///
/// Records are append-only: the engine constructs each exactly once, at the
/// moment a round is won, and never mutates or deletes it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Who won the round.
    pub player: PlayerId,

    /// Counted guesses it took.
    pub attempts: u32,

    /// The target that was solved.
    pub target: i64,

    /// When the winning guess was evaluated.
    pub completed_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Create a new score record.
    #[must_use]
    pub fn new(player: PlayerId, attempts: u32, target: i64, completed_at: DateTime<Utc>) -> Self {
        Self {
            player,
            attempts,
            target,
            completed_at,
        }
    }
}
