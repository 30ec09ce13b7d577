//! # rust-hilo
//!
//! A session-scoped number guessing engine with durable score history,
//! leaderboards, and achievement badges.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: HTTP routing, templating, authentication, and
//!    sharing belong to the consuming web layer. The engine owns the rules,
//!    session lifecycle, and score handoff.
//!
//! 2. **Deterministic by injection**: randomness enters through `GameRng`,
//!    so tests control every target draw and production seeds from entropy.
//!
//! 3. **Configuration over convention**: the target range and input policy
//!    come from `GameConfig` at startup; the classic [1, 100] game is the
//!    default, not a hardcoded rule.
//!
//! ## Architecture
//!
//! - **Outcomes are values**: a wrong guess is the game working, so
//!   `TooLow`/`TooHigh`/`Won` are ordinary results; only lost score writes
//!   are errors.
//!
//! - **One lock per round**: each live session sits behind its own mutex,
//!   and the winning evaluate-then-persist pair runs under it, so a win is
//!   recorded exactly once even under duplicate submissions.
//!
//! - **Append-only scores**: completed rounds are the only durable
//!   artifact; stats, leaderboard, and badges are pure reductions over
//!   them.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, session state
//! - `rules`: guess parsing and outcome classification
//! - `score`: completed-round records and derived statistics
//! - `store`: score persistence contract and the session registry
//! - `service`: the facade a web layer drives

pub mod core;
pub mod rules;
pub mod score;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameSession, OutOfRangePolicy, PlayerId};

pub use crate::rules::{evaluate, parse_guess, InvalidGuess, Outcome};

pub use crate::score::{
    badges_for, compute_stats, rank_players, Badge, LeaderboardEntry, PlayerStats, ScoreRecord,
};

pub use crate::store::{MemoryScoreStore, ScoreStore, SessionHandle, SessionMap, StoreError};

pub use crate::service::{EngineError, GameService};
