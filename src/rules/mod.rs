//! Guess evaluation: parsing, input policy, outcome classification.
//!
//! The rules are pure with respect to everything but the session passed
//! in: no persistence, no registry, no clock. The service layer composes
//! them with those collaborators.

pub mod engine;
pub mod outcome;

pub use engine::{evaluate, parse_guess};
pub use outcome::{InvalidGuess, Outcome};
