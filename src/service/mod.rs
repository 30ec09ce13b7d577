//! The facade a web layer drives.

pub mod game;

pub use game::{EngineError, GameService};
