//! Guess evaluation rules.
//!
//! The rules operate on a session the caller owns exclusively for the
//! duration of one call. The contract:
//!
//! - A finished round rejects every further guess without mutation
//! - Malformed input costs the player nothing
//! - Every counted guess raises `attempts` by exactly one
//! - The winning guess flips the round to its terminal state
//!
//! Score persistence is not a rules concern; the service layer hands off
//! the record after a win (see `service`).

use std::cmp::Ordering;

use crate::core::{GameConfig, GameSession, OutOfRangePolicy};

use super::outcome::{InvalidGuess, Outcome};

/// Parse a raw form value as a guess.
///
/// Surrounding whitespace is tolerated; anything that is not a base-10
/// integer is rejected.
#[must_use]
pub fn parse_guess(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Evaluate one submitted guess against a round.
///
/// ## Example
///
/// ```
/// use rust_hilo::core::{GameConfig, GameSession};
/// use rust_hilo::rules::{evaluate, Outcome};
///
/// let config = GameConfig::default();
/// let mut session = GameSession::with_target(50);
///
/// assert_eq!(evaluate(&config, &mut session, "30"), Outcome::TooLow { attempts: 1 });
/// assert_eq!(evaluate(&config, &mut session, "70"), Outcome::TooHigh { attempts: 2 });
/// assert_eq!(evaluate(&config, &mut session, "50"), Outcome::Won { attempts: 3 });
/// ```
pub fn evaluate(config: &GameConfig, session: &mut GameSession, raw: &str) -> Outcome {
    if session.is_over() {
        return Outcome::AlreadyOver;
    }

    let Some(guess) = parse_guess(raw) else {
        return Outcome::Invalid(InvalidGuess::NotANumber);
    };

    if !config.contains(guess) && config.out_of_range == OutOfRangePolicy::Reject {
        return Outcome::Invalid(InvalidGuess::OutOfRange {
            min: config.min_target,
            max: config.max_target,
        });
    }

    let attempts = session.count_guess(guess);
    match guess.cmp(&session.target()) {
        Ordering::Less => Outcome::TooLow { attempts },
        Ordering::Greater => Outcome::TooHigh { attempts },
        Ordering::Equal => {
            session.complete();
            Outcome::Won { attempts }
        }
    }
}
