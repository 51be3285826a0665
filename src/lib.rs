//! Bullseye - a recursive dart game on the unit disk
//!
//! Every dart that lands shrinks the target disk to the distance of the hit
//! from the center; the first dart that misses ends the game. The average
//! number of darts thrown per game converges to e^(π/4).
//!
//! Core modules:
//! - `sim`: Deterministic simulation (radius update, single game, runs)
//! - `settings`: Run options (seed, number of games)

pub mod settings;
pub mod sim;

pub use settings::{RunConfig, parse_seed};
pub use sim::{GameResult, RunSummary, ThrowOutcome, play_game, run, update_radius};

/// Game configuration constants
pub mod consts {
    /// Radius of the disk at the start of every game
    pub const START_RADIUS: f64 = 1.0;
    /// Darts land uniformly in [-THROW_EXTENT, THROW_EXTENT) on both axes
    pub const THROW_EXTENT: f64 = 1.0;
    /// Games played when no count is given
    pub const DEFAULT_GAMES: u32 = 100_000;
}

/// The value the mean score converges to: e^(π/4)
#[inline]
pub fn expected_score() -> f64 {
    std::f64::consts::FRAC_PI_4.exp()
}
