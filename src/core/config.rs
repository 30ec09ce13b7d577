//! Engine configuration types.
//!
//! Deployments configure the engine at startup by providing:
//! - The closed target range a fresh round draws from
//! - The policy for guesses that parse but fall outside that range
//!
//! The engine never hardcodes the range - the classic game uses [1, 100],
//! but that is the default configuration, not a rule.

use serde::{Deserialize, Serialize};

/// Policy for guesses that parse as integers but lie outside the target range.
///
/// The product's earlier releases evaluated such guesses like any other and
/// answered with a directional hint; later releases reject them before they
/// cost an attempt. Both behaviors stay available as configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutOfRangePolicy {
    /// Reject the guess as invalid; no attempt is counted.
    #[default]
    Reject,
    /// Count the guess and answer with a directional hint.
    Evaluate,
}

/// Engine configuration for one deployment.
///
/// ## Example
///
/// ```
/// use rust_hilo::core::{GameConfig, OutOfRangePolicy};
///
/// let config = GameConfig::default();
/// assert_eq!(config.min_target, 1);
/// assert_eq!(config.max_target, 100);
/// assert_eq!(config.out_of_range, OutOfRangePolicy::Reject);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lowest target a fresh round may draw (inclusive).
    pub min_target: i64,

    /// Highest target a fresh round may draw (inclusive).
    pub max_target: i64,

    /// What to do with parsed guesses outside `[min_target, max_target]`.
    pub out_of_range: OutOfRangePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_target: 1,
            max_target: 100,
            out_of_range: OutOfRangePolicy::Reject,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given target range.
    #[must_use]
    pub fn new(min_target: i64, max_target: i64) -> Self {
        assert!(
            min_target <= max_target,
            "Target range must be non-empty: min {} > max {}",
            min_target,
            max_target
        );
        Self {
            min_target,
            max_target,
            out_of_range: OutOfRangePolicy::default(),
        }
    }

    /// Set the out-of-range policy.
    #[must_use]
    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    /// Check whether a value lies within the target range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min_target..=self.max_target).contains(&value)
    }

    /// Number of distinct targets this configuration can draw.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.max_target.abs_diff(self.min_target) + 1
    }
}
