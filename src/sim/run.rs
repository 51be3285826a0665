//! Batches of games and their summary

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::game::play_game;
use super::state::GameResult;
use crate::expected_score;
use crate::settings::RunConfig;

/// Aggregate over all games of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Seed the run used, if it was seeded
    pub seed: Option<u64>,
    pub games: u32,
    /// Mean score, the estimate of e^(π/4)
    pub mean: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub bullseyes: u64,
    pub border_hits: u64,
}

impl RunSummary {
    /// Fold game results into a summary. An empty slice yields zero games,
    /// a mean of 0 and zero min/max scores.
    pub fn from_results(seed: Option<u64>, results: &[GameResult]) -> Self {
        let games = u32::try_from(results.len()).unwrap_or(u32::MAX);
        let total: u64 = results.iter().map(|r| u64::from(r.score)).sum();
        let mean = if games == 0 {
            0.0
        } else {
            total as f64 / results.len() as f64
        };

        Self {
            seed,
            games,
            mean,
            min_score: results.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: results.iter().map(|r| r.score).max().unwrap_or(0),
            bullseyes: results.iter().map(|r| u64::from(r.bullseyes)).sum(),
            border_hits: results.iter().map(|r| u64::from(r.border_hits)).sum(),
        }
    }

    #[inline]
    pub fn estimate(&self) -> f64 {
        self.mean
    }

    /// Exact value being estimated
    #[inline]
    pub fn expected(&self) -> f64 {
        expected_score()
    }

    /// Absolute distance between the estimate and e^(π/4)
    pub fn abs_error(&self) -> f64 {
        (self.mean - self.expected()).abs()
    }
}

/// Play `games` games with the given generator, in order.
pub fn run_with<R: Rng + ?Sized>(rng: &mut R, games: u32) -> Vec<GameResult> {
    (0..games).map(|_| play_game(rng)).collect()
}

/// Play a full run. The generator is seeded once, before the first game.
pub fn run(config: &RunConfig) -> RunSummary {
    match config.seed {
        Some(seed) => log::info!("Playing {} games with seed {}", config.games, seed),
        None => log::info!("Playing {} games unseeded", config.games),
    }

    let mut rng = config.rng();
    let results = run_with(&mut rng, config.games.get());

    for (i, result) in results.iter().enumerate() {
        if result.bullseyes > 0 || result.border_hits > 0 {
            log::debug!("Game {i}: {result:?}");
        }
    }

    let summary = RunSummary::from_results(config.seed, &results);

    log::info!(
        "Mean score {:.4} over {} games (error {:.4})",
        summary.mean,
        summary.games,
        summary.abs_error()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn config(seed: u64, games: u32) -> RunConfig {
        RunConfig::default()
            .with_seed(seed)
            .with_games(NonZeroU32::new(games).unwrap())
    }

    #[test]
    fn test_summary_from_results() {
        let results = [
            GameResult { score: 1, bullseyes: 0, border_hits: 0 },
            GameResult { score: 3, bullseyes: 1, border_hits: 0 },
            GameResult { score: 2, bullseyes: 0, border_hits: 1 },
        ];
        let summary = RunSummary::from_results(Some(1), &results);
        assert_eq!(summary.games, 3);
        assert!((summary.mean - 2.0).abs() < 1e-12);
        assert_eq!(summary.min_score, 1);
        assert_eq!(summary.max_score, 3);
        assert_eq!(summary.bullseyes, 1);
        assert_eq!(summary.border_hits, 1);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = RunSummary::from_results(None, &[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.min_score, 0);
        assert_eq!(summary.max_score, 0);
    }

    #[test]
    fn test_run_plays_every_game() {
        let summary = run(&config(3, 250));
        assert_eq!(summary.games, 250);
        assert_eq!(summary.seed, Some(3));
        assert!(summary.min_score >= 1);
        assert!(summary.mean >= 1.0);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let first = run(&config(4_242_424, 10_000));
        let second = run(&config(4_242_424, 10_000));
        assert_eq!(first, second);
        assert_eq!(first.mean, second.mean);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = run_with(&mut config(1, 1).rng(), 1_000);
        let b = run_with(&mut config(2, 1).rng(), 1_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mean_converges_to_exp_pi_over_4() {
        let summary = run(&config(20_240_601, 100_000));
        assert!(
            summary.abs_error() < 1.5e-2,
            "mean {} too far from {}",
            summary.mean,
            summary.expected()
        );
    }

    #[test]
    fn test_summary_json_fields() {
        let summary = run(&config(8, 100));
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["games"], 100);
        assert_eq!(value["seed"], 8);
        assert!(value["mean"].as_f64().unwrap() >= 1.0);
    }
}
