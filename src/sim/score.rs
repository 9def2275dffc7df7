//! Running score and high score

use serde::{Deserialize, Serialize};

/// Final tally of a lost game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    pub jumps: u32,
}

/// Per-process score bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub high_score: u32,
    pub jump_success_count: u32,
    pub jump_fail_count: u32,
}

impl Session {
    /// Start with a high score carried over from a previous run
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    /// One more successful landing
    pub fn record_landing(&mut self) -> u32 {
        self.score += 1;
        self.jump_success_count += 1;
        self.score
    }

    /// Close the game: fold the score into the high score, then zero it
    pub fn record_failure(&mut self) -> GameOverSummary {
        self.jump_fail_count += 1;
        self.high_score = self.high_score.max(self.score);
        let summary = GameOverSummary {
            score: self.score,
            high_score: self.high_score,
            jumps: self.jump_success_count + self.jump_fail_count,
        };
        self.score = 0;
        summary
    }

    /// Zero everything but the high score
    pub fn reset(&mut self) {
        *self = Self::with_high_score(self.high_score);
    }
}
