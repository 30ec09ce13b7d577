//! Achievement badges derived from score history.
//!
//! Badges are a pure threshold reduction over a player's records. They are
//! never stored; the profile page recomputes them from the same history
//! that feeds the stats view, so they can never drift out of sync with it.

use serde::{Deserialize, Serialize};

use super::record::ScoreRecord;

/// Best-score ceiling for [`Badge::SharpGuesser`].
pub const SHARP_GUESSER_MAX_ATTEMPTS: u32 = 5;

/// Completed-round floor for [`Badge::Veteran`].
pub const VETERAN_MIN_GAMES: u64 = 10;

/// An achievement earned from score history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// Completed a first round.
    FirstWin,
    /// Solved some round on the very first guess.
    OneShot,
    /// Best round took at most [`SHARP_GUESSER_MAX_ATTEMPTS`] attempts.
    SharpGuesser,
    /// Completed at least [`VETERAN_MIN_GAMES`] rounds.
    Veteran,
}

/// Compute the badges a record set has earned.
///
/// Returned in a fixed display order; empty input earns nothing.
#[must_use]
pub fn badges_for<'a, I>(records: I) -> Vec<Badge>
where
    I: IntoIterator<Item = &'a ScoreRecord>,
{
    let mut total_games = 0u64;
    let mut best: Option<u32> = None;

    for record in records {
        total_games += 1;
        best = Some(best.map_or(record.attempts, |b| b.min(record.attempts)));
    }

    let mut badges = Vec::new();

    if total_games >= 1 {
        badges.push(Badge::FirstWin);
    }
    if best.is_some_and(|b| b == 1) {
        badges.push(Badge::OneShot);
    }
    if best.is_some_and(|b| b <= SHARP_GUESSER_MAX_ATTEMPTS) {
        badges.push(Badge::SharpGuesser);
    }
    if total_games >= VETERAN_MIN_GAMES {
        badges.push(Badge::Veteran);
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use chrono::Utc;

    fn record(attempts: u32) -> ScoreRecord {
        ScoreRecord::new(PlayerId::new(1), attempts, 50, Utc::now())
    }

    #[test]
    fn test_no_history_no_badges() {
        assert!(badges_for([]).is_empty());
    }

    #[test]
    fn test_first_win() {
        let records = vec![record(20)];
        assert_eq!(badges_for(&records), vec![Badge::FirstWin]);
    }

    #[test]
    fn test_sharp_guesser_boundary() {
        let at_threshold = vec![record(SHARP_GUESSER_MAX_ATTEMPTS)];
        assert!(badges_for(&at_threshold).contains(&Badge::SharpGuesser));

        let above_threshold = vec![record(SHARP_GUESSER_MAX_ATTEMPTS + 1)];
        assert!(!badges_for(&above_threshold).contains(&Badge::SharpGuesser));
    }

    #[test]
    fn test_one_shot_implies_sharp_guesser() {
        let records = vec![record(1)];
        let badges = badges_for(&records);

        assert!(badges.contains(&Badge::OneShot));
        assert!(badges.contains(&Badge::SharpGuesser));
    }

    #[test]
    fn test_veteran_boundary() {
        let nine: Vec<_> = (0..9).map(|_| record(10)).collect();
        assert!(!badges_for(&nine).contains(&Badge::Veteran));

        let ten: Vec<_> = (0..10).map(|_| record(10)).collect();
        assert!(badges_for(&ten).contains(&Badge::Veteran));
    }

    #[test]
    fn test_full_set() {
        let mut records: Vec<_> = (0..10).map(|_| record(8)).collect();
        records.push(record(1));

        assert_eq!(
            badges_for(&records),
            vec![
                Badge::FirstWin,
                Badge::OneShot,
                Badge::SharpGuesser,
                Badge::Veteran
            ]
        );
    }
}
