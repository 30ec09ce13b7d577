//! Session state for a single guessing round.
//!
//! ## Lifecycle
//!
//! A session is created with a fixed target, accumulates counted guesses
//! while in progress, and becomes permanently over once a guess matches the
//! target. There is no edge back from a finished round - a new round means
//! a new session.
//!
//! The type is a plain serde value: an external session store may snapshot
//! it, and the service layer clones it freely when handing state to the web
//! layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::rng::GameRng;

/// One player's guessing round.
///
/// Invariants:
/// - `target` never changes after creation
/// - `attempts` equals `history.len()` and only grows
/// - once `over` is true, no further guess mutates the session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    target: i64,
    attempts: u32,
    over: bool,
    /// Counted guesses in submission order. Rejected input never lands here.
    /// A binary-searching player needs at most 7 entries for the default
    /// range, so the inline capacity avoids heap allocation in the common case.
    history: SmallVec<[i64; 8]>,
}

impl GameSession {
    /// Start a fresh round with a target drawn from the configured range.
    #[must_use]
    pub fn start(config: &GameConfig, rng: &mut GameRng) -> Self {
        Self::with_target(rng.gen_range_inclusive(config.min_target..=config.max_target))
    }

    /// Create a round with a known target.
    ///
    /// This is the injection point for deterministic tests and for callers
    /// that source targets elsewhere.
    #[must_use]
    pub fn with_target(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
            over: false,
            history: SmallVec::new(),
        }
    }

    /// The number this round wants guessed.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Counted guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the round has been won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Counted guesses in submission order.
    #[must_use]
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Count one evaluated guess and return the new attempt total.
    pub(crate) fn count_guess(&mut self, guess: i64) -> u32 {
        debug_assert!(!self.over, "counted a guess on a finished round");
        self.attempts += 1;
        self.history.push(guess);
        self.attempts
    }

    /// Mark the round as won. Terminal; never unset.
    pub(crate) fn complete(&mut self) {
        debug_assert!(!self.over, "completed a round twice");
        self.over = true;
    }
}
