//! Best runs across sessions
//!
//! Each finished game that scored at least one landing is kept as a
//! `RunRecord`, best first. The top entry seeds the session high score.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HopError;
use crate::sim::GameOverSummary;

/// Runs kept on file
pub const MAX_RUNS: usize = 10;

/// One finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Platforms landed on
    pub score: u32,
    /// Jumps attempted, including the miss
    pub jumps: u32,
    /// Unix timestamp (ms) of the miss
    pub timestamp: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished game. Returns its 1-based place, or None when the
    /// run scored nothing or falls below a full table.
    ///
    /// Equal scores keep the earlier run ahead.
    pub fn record(&mut self, summary: &GameOverSummary, timestamp: f64) -> Option<usize> {
        if summary.score == 0 {
            return None;
        }
        let at = self.runs.partition_point(|r| r.score >= summary.score);
        if at >= MAX_RUNS {
            return None;
        }
        self.runs.insert(
            at,
            RunRecord {
                score: summary.score,
                jumps: summary.jumps,
                timestamp,
            },
        );
        self.runs.truncate(MAX_RUNS);
        Some(at + 1)
    }

    /// Best score on file, 0 when there is none
    pub fn best(&self) -> u32 {
        self.runs.first().map_or(0, |r| r.score)
    }

    /// Load from a JSON file. A missing file is an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HopError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No high scores at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let mut scores: HighScores = serde_json::from_str(&json)?;
        // Hand-edited files may be out of order
        scores.runs.sort_by(|a, b| b.score.cmp(&a.score));
        scores.runs.truncate(MAX_RUNS);
        log::info!("Loaded {} runs, best {}", scores.runs.len(), scores.best());
        Ok(scores)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HopError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("High scores saved ({} runs)", self.runs.len());
        Ok(())
    }
}
