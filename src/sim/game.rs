//! Playing a full game with a random source

use glam::DVec2;
use rand::Rng;

use super::state::{GameResult, GameState};
use crate::consts::THROW_EXTENT;

/// A dart position on the board square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dart {
    pub pos: DVec2,
}

impl Dart {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
        }
    }

    /// Draw both coordinates independently and uniformly from the board square
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(-THROW_EXTENT..THROW_EXTENT);
        let y = rng.random_range(-THROW_EXTENT..THROW_EXTENT);
        Self::new(x, y)
    }
}

/// Throw random darts at a fresh unit disk until one misses.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> GameResult {
    let mut state = GameState::new();
    loop {
        let dart = Dart::sample(rng);
        state.throw_at(dart.pos.x, dart.pos.y);
        if let Some(result) = state.result() {
            return result;
        }
    }
}
