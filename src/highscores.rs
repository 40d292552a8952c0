//! High score leaderboard
//!
//! Kept in memory for the lifetime of the shell, tracks the top 10 runs.

use serde::{Deserialize, Serialize};

use crate::engine::Stage;
use crate::session::GameSession;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Highest stage on the board when the run ended
    pub best_stage: Option<Stage>,
    /// Whether the run reached Exit
    pub exited: bool,
    /// Accepted moves
    pub moves: u32,
}

impl HighScoreEntry {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            score: session.score(),
            best_stage: session.grid().highest_stage(),
            exited: session.has_won(),
            moves: session.moves(),
        }
    }
}

/// High score leaderboard, sorted by score descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Slot a score would take; ties land behind earlier runs
    fn slot_for(&self, score: u64) -> Option<usize> {
        let slot = self.entries.partition_point(|e| e.score >= score);
        (score > 0 && slot < MAX_HIGH_SCORES).then_some(slot)
    }

    pub fn qualifies(&self, score: u64) -> bool {
        self.slot_for(score).is_some()
    }

    /// 1-based rank a score would reach, `None` if it stays off the board
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.slot_for(score).map(|slot| slot + 1)
    }

    /// Insert a run, returning its 1-based rank
    pub fn add_entry(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let slot = self.slot_for(entry.score)?;
        self.entries.insert(slot, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Record the current state of a session
    pub fn record(&mut self, session: &GameSession) -> Option<usize> {
        let rank = self.add_entry(HighScoreEntry::from_session(session));
        if let Some(rank) = rank {
            log::info!("Score {} ranked #{}", session.score(), rank);
        }
        rank
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Direction, Grid};

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry {
            score,
            best_stage: Some(Stage::Seed),
            exited: false,
            moves: 1,
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_entries_stay_sorted() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_entry(entry(10)), Some(1));
        assert_eq!(scores.add_entry(entry(30)), Some(1));
        assert_eq!(scores.add_entry(entry(20)), Some(2));
        assert_eq!(scores.add_entry(entry(20)), Some(3));

        let ordered: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![30, 20, 20, 10]);
        assert_eq!(scores.top_score(), Some(30));
    }

    #[test]
    fn test_full_board_drops_lowest() {
        let mut scores = HighScores::new();
        for score in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_entry(entry(score * 10));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(10));
        assert_eq!(scores.potential_rank(15), Some(MAX_HIGH_SCORES));

        assert_eq!(scores.add_entry(entry(15)), Some(MAX_HIGH_SCORES));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(15));
    }

    #[test]
    fn test_record_captures_session() {
        let start = Grid::from_labels(&[&["IPO", "IPO", ".", "."], &["."; 4], &["."; 4], &["."; 4]])
            .unwrap();
        let mut session = GameSession::from_parts(9, start, 0);
        session.play(Direction::Left);

        let mut scores = HighScores::new();
        assert_eq!(scores.record(&session), Some(1));
        let best = &scores.entries[0];
        assert_eq!(best.score, 10);
        assert_eq!(best.best_stage, Some(Stage::Exit));
        assert!(best.exited);
        assert_eq!(best.moves, 1);
    }
}
