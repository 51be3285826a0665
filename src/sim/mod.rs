//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed in by the caller
//! - No global state
//! - No I/O beyond logging

pub mod game;
pub mod run;
pub mod state;
pub mod throw;

pub use game::{Dart, play_game};
pub use run::{RunSummary, run, run_with};
pub use state::{GamePhase, GameResult, GameState};
pub use throw::{Region, ThrowOutcome, classify, update_radius};
