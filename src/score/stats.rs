//! Derived player statistics and the leaderboard reduction.
//!
//! Nothing here is stored: both reductions are pure functions over a
//! record set and are recomputed on demand. The store decides how the
//! records are fetched; callers decide how the results are rendered.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::record::ScoreRecord;

/// Aggregate statistics for one player's score history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Fewest attempts across all completed rounds. `None` with no history.
    pub best: Option<u32>,

    /// Completed rounds on record.
    pub total_games: u64,

    /// Mean attempts per completed round. `None` with no history.
    pub average: Option<f64>,
}

/// Reduce a player's records to aggregate statistics.
///
/// Order-insensitive; the input is never mutated.
///
/// ## Example
///
/// ```
/// use chrono::Utc;
/// use rust_hilo::core::PlayerId;
/// use rust_hilo::score::{compute_stats, ScoreRecord};
///
/// let records: Vec<_> = [3, 1, 5]
///     .iter()
///     .map(|&attempts| ScoreRecord::new(PlayerId::new(1), attempts, 50, Utc::now()))
///     .collect();
///
/// let stats = compute_stats(&records);
/// assert_eq!(stats.best, Some(1));
/// assert_eq!(stats.total_games, 3);
/// assert_eq!(stats.average, Some(3.0));
/// ```
#[must_use]
pub fn compute_stats<'a, I>(records: I) -> PlayerStats
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let mut best: Option<u32> = None;
    let mut total_games = 0u64;
    let mut attempt_sum = 0u64;

    for record in records {
        total_games += 1;
        attempt_sum += u64::from(record.attempts);
        best = Some(best.map_or(record.attempts, |b| b.min(record.attempts)));
    }

    let average = (total_games > 0).then(|| attempt_sum as f64 / total_games as f64);

    PlayerStats {
        best,
        total_games,
        average,
    }
}

/// One leaderboard row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// The ranked player.
    pub player: PlayerId,

    /// Their fewest attempts in a single round.
    pub best_attempts: u32,

    /// How many rounds they have completed.
    pub total_games: u64,
}

/// Rank players by their best round, ascending.
///
/// Ties on best attempts are broken by who achieved that best first, then
/// by player id so the ordering is total. At most `limit` rows are
/// returned.
#[must_use]
pub fn rank_players<'a, I>(records: I, limit: usize) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    struct Tally {
        best: u32,
        best_at: chrono::DateTime<chrono::Utc>,
        games: u64,
    }

    let mut tallies: FxHashMap<PlayerId, Tally> = FxHashMap::default();

    for record in records {
        tallies
            .entry(record.player)
            .and_modify(|t| {
                t.games += 1;
                // Equal scores keep the earliest timestamp, so input order
                // never changes the ranking.
                if record.attempts < t.best {
                    t.best = record.attempts;
                    t.best_at = record.completed_at;
                } else if record.attempts == t.best && record.completed_at < t.best_at {
                    t.best_at = record.completed_at;
                }
            })
            .or_insert(Tally {
                best: record.attempts,
                best_at: record.completed_at,
                games: 1,
            });
    }

    let mut rows: Vec<(PlayerId, Tally)> = tallies.into_iter().collect();
    rows.sort_by(|(pa, a), (pb, b)| {
        a.best
            .cmp(&b.best)
            .then(a.best_at.cmp(&b.best_at))
            .then(pa.cmp(pb))
    });
    rows.truncate(limit);

    rows.into_iter()
        .map(|(player, t)| LeaderboardEntry {
            player,
            best_attempts: t.best,
            total_games: t.games,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(player: u64, attempts: u32, secs: i64) -> ScoreRecord {
        ScoreRecord::new(
            PlayerId::new(player),
            attempts,
            50,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
    }

    #[test]
    fn test_stats_over_mixed_history() {
        let records = vec![record(1, 3, 0), record(1, 1, 10), record(1, 5, 20)];

        let stats = compute_stats(&records);

        assert_eq!(stats.best, Some(1));
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.average, Some(3.0));
    }

    #[test]
    fn test_stats_empty_history() {
        let stats = compute_stats([]);

        assert_eq!(stats.best, None);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.average, None);
    }

    #[test]
    fn test_stats_single_record() {
        let records = vec![record(1, 7, 0)];

        let stats = compute_stats(&records);

        assert_eq!(stats.best, Some(7));
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.average, Some(7.0));
    }

    #[test]
    fn test_stats_does_not_consume_input() {
        let records = vec![record(1, 2, 0)];
        let _ = compute_stats(&records);

        // Still usable afterwards.
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_rank_orders_by_best_ascending() {
        let records = vec![
            record(1, 6, 0),
            record(2, 2, 10),
            record(3, 4, 20),
            record(2, 9, 30),
        ];

        let rows = rank_players(&records, 10);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].player, PlayerId::new(2));
        assert_eq!(rows[0].best_attempts, 2);
        assert_eq!(rows[0].total_games, 2);
        assert_eq!(rows[1].player, PlayerId::new(3));
        assert_eq!(rows[2].player, PlayerId::new(1));
    }

    #[test]
    fn test_rank_tie_break_earliest_best() {
        // Both players' best is 3; player 5 got there first.
        let records = vec![
            record(4, 3, 100),
            record(5, 3, 50),
            record(4, 8, 200),
        ];

        let rows = rank_players(&records, 10);

        assert_eq!(rows[0].player, PlayerId::new(5));
        assert_eq!(rows[1].player, PlayerId::new(4));
    }

    #[test]
    fn test_rank_equal_score_later_does_not_improve_tiebreak() {
        // Player 6 repeats their best later; the first achievement stands.
        let records = vec![
            record(6, 3, 10),
            record(7, 3, 20),
            record(6, 3, 5),
        ];

        let rows = rank_players(&records, 10);

        // Player 6's earliest best (t=5) precedes player 7's (t=20).
        assert_eq!(rows[0].player, PlayerId::new(6));
        assert_eq!(rows[1].player, PlayerId::new(7));
    }

    #[test]
    fn test_rank_final_tie_break_is_player_id() {
        let records = vec![record(9, 3, 50), record(8, 3, 50)];

        let rows = rank_players(&records, 10);

        assert_eq!(rows[0].player, PlayerId::new(8));
        assert_eq!(rows[1].player, PlayerId::new(9));
    }

    #[test]
    fn test_rank_respects_limit() {
        let records = vec![record(1, 1, 0), record(2, 2, 0), record(3, 3, 0)];

        let rows = rank_players(&records, 2);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player, PlayerId::new(1));
        assert_eq!(rows[1].player, PlayerId::new(2));
    }

    #[test]
    fn test_rank_empty_records() {
        assert!(rank_players([], 10).is_empty());
    }

    #[test]
    fn test_stats_serialization() {
        let stats = compute_stats(&[record(1, 3, 0)]);
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: PlayerStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
