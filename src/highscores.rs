//! High score leaderboard
//!
//! Keeps the top 10 lives across all difficulties, persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::sim::{Difficulty, GameOverReason};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Ticks survived
    pub score: u64,
    pub difficulty: Difficulty,
    /// How the life ended
    pub reason: GameOverReason,
}

/// High score leaderboard (sorted, best first)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Default file name
    pub const FILE_NAME: &'static str = "magnetic_mirror_highscores.json";

    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished life; returns the rank achieved
    pub fn add_score(
        &mut self,
        score: u64,
        difficulty: Difficulty,
        reason: GameOverReason,
    ) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                difficulty,
                reason,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Best score for one difficulty
    pub fn best_for(&self, difficulty: Difficulty) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.difficulty == difficulty)
            .map(|e| e.score)
    }

    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let json = fs::read_to_string(path)?;
        let scores: HighScores = serde_json::from_str(&json)?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    /// Load the leaderboard, starting fresh if it is missing or corrupt
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No high scores found, starting fresh");
            return Self::new();
        }
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Discarding high scores at {}: {}", path.display(), err);
            Self::new()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
