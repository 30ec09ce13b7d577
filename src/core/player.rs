//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe opaque identifier for a player account. The engine never
//! interprets the value; the authentication layer owns the mapping from
//! credentials to ids and guarantees stability across rounds.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// Ordering is derived so leaderboard ties have a stable final tie-break;
/// it carries no meaning beyond that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}
