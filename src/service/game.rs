//! Game service facade.
//!
//! `GameService` is what the web layer drives: it owns the configuration,
//! the injected RNG, the per-player session registry, and the score store,
//! and it applies the evaluation rules under each session's lock so a win
//! is recorded exactly once.
//!
//! ## Ordering on a win
//!
//! State is mutated first (the round flips to over), then the record is
//! handed to the store, and both happen under the session lock. A failed
//! write therefore leaves a finished round with no record - the caller
//! receives the error instead of the win and must not present the score
//! as saved. The alternative, rolling the round back, would let a player
//! retry the same target with a reset attempt count.

use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use crate::core::{GameConfig, GameRng, GameSession, PlayerId};
use crate::rules::{evaluate, Outcome};
use crate::score::{badges_for, compute_stats, Badge, LeaderboardEntry, PlayerStats, ScoreRecord};
use crate::store::{ScoreStore, SessionMap, StoreError};

/// Failure surfaced by the service.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The score store rejected an operation. On a win this means the
    /// round finished but its score is not recorded.
    #[error("score store failure: {0}")]
    Store(#[from] StoreError),
}

/// The engine facade a web layer consumes.
pub struct GameService<S> {
    config: GameConfig,
    rng: Mutex<GameRng>,
    sessions: SessionMap,
    scores: S,
}

impl<S: ScoreStore> GameService<S> {
    /// Create a service with the default configuration and an
    /// entropy-seeded RNG.
    #[must_use]
    pub fn new(scores: S) -> Self {
        Self::with_config(GameConfig::default(), GameRng::from_entropy(), scores)
    }

    /// Create a service with explicit configuration and RNG.
    ///
    /// This is the deterministic construction tests use.
    ///
    /// ## Example
    ///
    /// ```
    /// use rust_hilo::core::{GameConfig, GameRng, PlayerId};
    /// use rust_hilo::rules::Outcome;
    /// use rust_hilo::service::GameService;
    /// use rust_hilo::store::MemoryScoreStore;
    ///
    /// let service = GameService::with_config(
    ///     GameConfig::default(),
    ///     GameRng::new(7),
    ///     MemoryScoreStore::new(),
    /// );
    ///
    /// let player = PlayerId::new(1);
    /// let session = service.start(player);
    /// let outcome = service.guess(player, &session.target().to_string()).unwrap();
    /// assert_eq!(outcome, Outcome::Won { attempts: 1 });
    /// ```
    #[must_use]
    pub fn with_config(config: GameConfig, rng: GameRng, scores: S) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
            sessions: SessionMap::new(),
            scores,
        }
    }

    /// The configuration this service runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The score store this service persists to.
    #[must_use]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Start a round for a player, or return their round in progress.
    ///
    /// Idempotent for an unfinished round. A finished round is superseded
    /// by a fresh one with a newly drawn target. The returned session is a
    /// snapshot; the authoritative state stays in the registry.
    pub fn start(&self, player: PlayerId) -> GameSession {
        let handle = self.sessions.start_with(player, || {
            let mut rng = self.rng.lock().expect("rng lock poisoned");
            let session = GameSession::start(&self.config, &mut rng);
            log::debug!("started round for {}", player);
            session
        });
        let snapshot = handle.lock().expect("session lock poisoned").clone();
        snapshot
    }

    /// Evaluate one submitted guess for a player.
    ///
    /// The session lock is held across evaluation and score handoff, so
    /// concurrent submissions serialize and a win persists exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the player has no registered session. The inbound
    /// contract makes start-before-guess the caller's responsibility, so a
    /// missing session is a programming error, not a game condition.
    pub fn guess(&self, player: PlayerId, raw: &str) -> Result<Outcome, EngineError> {
        let handle = self
            .sessions
            .get(player)
            .expect("guess() without a session; call start() first");
        let mut session = handle.lock().expect("session lock poisoned");

        let outcome = evaluate(&self.config, &mut session, raw);

        if let Outcome::Won { attempts } = outcome {
            let record = ScoreRecord::new(player, attempts, session.target(), Utc::now());
            if let Err(err) = self.scores.save(record) {
                log::error!("score write failed for {}: {}", player, err);
                return Err(err.into());
            }
            log::info!("{} won in {} attempts", player, attempts);
        }

        Ok(outcome)
    }

    /// Discard any round for a player, finished or not.
    ///
    /// No-op when none exists; never touches persisted scores. The next
    /// `start` draws a fresh target.
    pub fn reset(&self, player: PlayerId) {
        if self.sessions.remove(player) {
            log::debug!("reset round for {}", player);
        }
    }

    /// Aggregate statistics over a player's score history.
    pub fn stats(&self, player: PlayerId) -> Result<PlayerStats, EngineError> {
        let records = self.scores.for_player(player)?;
        Ok(compute_stats(&records))
    }

    /// The best-round leaderboard, at most `limit` rows.
    pub fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, EngineError> {
        Ok(self.scores.top_scores(limit)?)
    }

    /// Achievement badges earned by a player's score history.
    pub fn badges(&self, player: PlayerId) -> Result<Vec<Badge>, EngineError> {
        let records = self.scores.for_player(player)?;
        Ok(badges_for(&records))
    }
}
