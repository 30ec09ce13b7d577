//! Outcome classification for one evaluated guess.
//!
//! Outcomes are ordinary values, not errors: a wrong guess is the game
//! working as intended. The web layer matches on the variant to pick a
//! message and tone.

use serde::{Deserialize, Serialize};

/// Why a guess was rejected without costing an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidGuess {
    /// The input did not parse as an integer.
    NotANumber,
    /// The input parsed but lies outside the configured target range.
    OutOfRange {
        /// Lowest accepted value (inclusive).
        min: i64,
        /// Highest accepted value (inclusive).
        max: i64,
    },
}

/// Result of evaluating one submitted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The guess was below the target. Costs an attempt.
    TooLow {
        /// Attempt total after this guess.
        attempts: u32,
    },
    /// The guess was above the target. Costs an attempt.
    TooHigh {
        /// Attempt total after this guess.
        attempts: u32,
    },
    /// The guess matched the target. The round is over.
    Won {
        /// Final attempt total for the round.
        attempts: u32,
    },
    /// The input was rejected before touching the round. Costs nothing.
    Invalid(InvalidGuess),
    /// The round was already won; nothing was evaluated or mutated.
    AlreadyOver,
}

impl Outcome {
    /// Whether this outcome ended the round.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, Outcome::Won { .. })
    }

    /// Whether this outcome consumed an attempt.
    #[must_use]
    pub fn counted_attempt(&self) -> bool {
        matches!(
            self,
            Outcome::TooLow { .. } | Outcome::TooHigh { .. } | Outcome::Won { .. }
        )
    }
}
