//! Session bookkeeping: score, lives, streak, and the best score
//!
//! Consumes the two sim events (scored/missed) and nothing else. The best
//! score lives only as long as the page; there is no storage layer.

use serde::{Deserialize, Serialize};

use crate::consts::{POINTS_PER_BASKET, STARTING_LIVES};
use crate::sim::ShotOutcome;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    /// Start overlay is up, waiting for the player
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Out of lives
    GameOver,
}

/// One player session: score and lives across consecutive shots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: SessionPhase,
    pub score: u32,
    pub lives: u8,
    /// Consecutive makes
    pub streak: u32,
    /// Best score seen since page load
    pub best: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Ready,
            score: 0,
            lives: STARTING_LIVES,
            streak: 0,
            best: 0,
        }
    }

    /// Begin play, from the start overlay or after a game over
    pub fn start(&mut self) {
        self.phase = SessionPhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.streak = 0;
        log::info!("session started ({} lives)", self.lives);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Apply one resolved shot. Outcomes outside active play are ignored.
    pub fn on_shot(&mut self, outcome: ShotOutcome) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        match outcome {
            ShotOutcome::Scored => {
                self.streak += 1;
                self.score += POINTS_PER_BASKET;
                if self.score > self.best {
                    self.best = self.score;
                }
            }
            ShotOutcome::Missed => {
                self.streak = 0;
                self.lives = self.lives.saturating_sub(1);
                if self.lives == 0 {
                    self.phase = SessionPhase::GameOver;
                    log::info!("game over, score {} (best {})", self.score, self.best);
                }
            }
        }
    }
}
