//! Storage collaborators: durable scores and live sessions.
//!
//! Completed rounds are the only durable artifact; in-progress sessions
//! live in the per-player registry and die with the process (or with an
//! explicit reset).

pub mod memory;
pub mod score;
pub mod sessions;

pub use memory::MemoryScoreStore;
pub use score::{ScoreStore, StoreError};
pub use sessions::{SessionHandle, SessionMap};
