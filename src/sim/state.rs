//! Game state for a single bullseye game
//!
//! A game is a disk that only ever shrinks, plus a throw counter.

use serde::{Deserialize, Serialize};

use super::throw::{Region, ThrowOutcome, classify};
use crate::consts::START_RADIUS;

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Darts still land on the disk
    InPlay,
    /// A dart missed; the score is final
    Over,
}

/// Final tally of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Darts thrown, including the one that missed
    pub score: u32,
    /// Darts that hit the exact center
    pub bullseyes: u32,
    /// Darts that hit the boundary exactly
    pub border_hits: u32,
}

/// Complete state of one game (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current disk radius
    pub radius: f64,
    /// Darts thrown so far
    pub score: u32,
    pub bullseyes: u32,
    pub border_hits: u32,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game on the unit disk
    pub fn new() -> Self {
        Self {
            radius: START_RADIUS,
            score: 0,
            bullseyes: 0,
            border_hits: 0,
            phase: GamePhase::InPlay,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Throw one dart at (x, y). Every throw counts toward the score, the
    /// miss included. Throwing into a finished game changes nothing.
    pub fn throw_at(&mut self, x: f64, y: f64) -> ThrowOutcome {
        if self.is_over() {
            return ThrowOutcome::Missed;
        }

        self.score += 1;
        let region = classify(x, y, self.radius);
        match region {
            Region::Bullseye => self.bullseyes += 1,
            Region::Border => {
                self.border_hits += 1;
                log::debug!("Border hit at ({x}, {y}) on throw {}", self.score);
            }
            Region::Interior | Region::Outside => {}
        }

        let outcome = region.outcome(x, y, self.radius);
        match outcome.radius() {
            Some(radius) => self.radius = radius,
            None => self.phase = GamePhase::Over,
        }
        outcome
    }

    /// Final tally, once the game is over
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then_some(GameResult {
            score: self.score,
            bullseyes: self.bullseyes,
            border_hits: self.border_hits,
        })
    }
}
