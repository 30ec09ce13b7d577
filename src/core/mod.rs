//! Core engine types: players, RNG, configuration, session state.
//!
//! This module contains the fundamental building blocks of a guessing
//! round. Deployments configure the target range via `GameConfig` rather
//! than the core hardcoding it.

pub mod config;
pub mod player;
pub mod rng;
pub mod session;

pub use config::{GameConfig, OutOfRangePolicy};
pub use player::PlayerId;
pub use rng::GameRng;
pub use session::GameSession;
