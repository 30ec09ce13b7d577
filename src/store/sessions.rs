//! In-memory registry of live sessions, one per player.
//!
//! Each session sits behind its own mutex so that at most one evaluation
//! at a time can mutate a round - two near-simultaneous submissions for
//! the same player (double-click, retried request) serialize instead of
//! both observing an unfinished round. The registry lock is held only to
//! look up, insert, or remove entries, never across an evaluation, so
//! different players never contend with each other.

use std::sync::{Arc, Mutex, RwLock};

use rustc_hash::FxHashMap;

use crate::core::{GameSession, PlayerId};

/// Shared handle to one player's live session.
pub type SessionHandle = Arc<Mutex<GameSession>>;

/// Registry of live sessions keyed by player.
#[derive(Debug, Default)]
pub struct SessionMap {
    inner: RwLock<FxHashMap<PlayerId, SessionHandle>>,
}

impl SessionMap {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the live session for a player, if any is registered.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<SessionHandle> {
        self.inner
            .read()
            .expect("session registry lock poisoned")
            .get(&player)
            .cloned()
    }

    /// Get the player's in-progress session, or register a fresh one.
    ///
    /// A registered session that is still in progress is returned
    /// unchanged; a finished (or missing) one is superseded by `fresh()`.
    /// The factory only runs when a new session is actually needed.
    pub fn start_with(
        &self,
        player: PlayerId,
        fresh: impl FnOnce() -> GameSession,
    ) -> SessionHandle {
        let mut map = self.inner.write().expect("session registry lock poisoned");

        if let Some(existing) = map.get(&player) {
            let in_progress = !existing.lock().expect("session lock poisoned").is_over();
            if in_progress {
                return Arc::clone(existing);
            }
        }

        let handle = Arc::new(Mutex::new(fresh()));
        map.insert(player, Arc::clone(&handle));
        handle
    }

    /// Discard any registered session for a player. No-op when none exists.
    pub fn remove(&self, player: PlayerId) -> bool {
        self.inner
            .write()
            .expect("session registry lock poisoned")
            .remove(&player)
            .is_some()
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("session registry lock poisoned")
            .len()
    }

    /// Whether no sessions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unknown_player() {
        let map = SessionMap::new();
        assert!(map.get(PlayerId::new(1)).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_start_registers_once_while_in_progress() {
        let map = SessionMap::new();
        let player = PlayerId::new(1);

        let first = map.start_with(player, || GameSession::with_target(50));
        let second = map.start_with(player, || panic!("factory must not run"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_finished_session_is_superseded() {
        let map = SessionMap::new();
        let player = PlayerId::new(1);

        let first = map.start_with(player, || GameSession::with_target(50));
        {
            let mut session = first.lock().unwrap();
            session.count_guess(50);
            session.complete();
        }

        let second = map.start_with(player, || GameSession::with_target(60));

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().unwrap().target(), 60);
        assert_eq!(second.lock().unwrap().attempts(), 0);
    }

    #[test]
    fn test_remove_is_unconditional() {
        let map = SessionMap::new();
        let player = PlayerId::new(1);

        assert!(!map.remove(player));

        map.start_with(player, || GameSession::with_target(50));
        assert!(map.remove(player));
        assert!(map.get(player).is_none());
    }

    #[test]
    fn test_players_are_independent() {
        let map = SessionMap::new();

        let a = map.start_with(PlayerId::new(1), || GameSession::with_target(10));
        let b = map.start_with(PlayerId::new(2), || GameSession::with_target(20));

        a.lock().unwrap().count_guess(5);

        assert_eq!(a.lock().unwrap().attempts(), 1);
        assert_eq!(b.lock().unwrap().attempts(), 0);
        assert_eq!(map.len(), 2);
    }
}
