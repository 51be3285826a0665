//! Run options
//!
//! Only two knobs exist: the seed and the number of games.

use std::num::NonZeroU32;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_GAMES;

/// Options for a batch of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for the generator; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Number of games to play
    pub games: NonZeroU32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            games: NonZeroU32::new(DEFAULT_GAMES).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl RunConfig {
    /// Build from raw options. An unusable seed string is dropped and the
    /// run proceeds unseeded; a missing game count falls back to the default.
    pub fn from_options(seed: Option<&str>, games: Option<NonZeroU32>) -> Self {
        let defaults = Self::default();
        Self {
            seed: seed.and_then(parse_seed),
            games: games.unwrap_or(defaults.games),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_games(mut self, games: NonZeroU32) -> Self {
        self.games = games;
        self
    }

    /// Generator for this run. Seeded runs are reproducible.
    pub fn rng(&self) -> Pcg32 {
        match self.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        }
    }
}

/// Parse a seed option. Non-numeric or out-of-range input is ignored.
pub fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring seed {raw:?} ({e}); running unseeded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.games.get(), 100_000);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 7 "), Some(7));
        assert_eq!(parse_seed("abc"), None);
        assert_eq!(parse_seed("-3"), None);
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("99999999999999999999999"), None);
    }

    #[test]
    fn test_from_options() {
        let config = RunConfig::from_options(Some("123"), NonZeroU32::new(10));
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.games.get(), 10);

        let config = RunConfig::from_options(Some("not-a-seed"), None);
        assert_eq!(config.seed, None);
        assert_eq!(config.games.get(), 100_000);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = RunConfig::default().with_seed(2024);
        let mut a = config.rng();
        let mut b = config.rng();
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_config_json() {
        let config = RunConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"seed":5,"games":100000}"#);
    }
}
