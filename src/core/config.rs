//! Game configuration types.
//!
//! Presentation layers configure a table at startup by providing:
//! - `Difficulty`: how many pairs are dealt
//! - `RatingThresholds`: where the end-of-game rating tiers fall
//! - `GameConfig`: combines the above with the mismatch delay and seed

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Pair counts a session may be dealt with.
pub const ALLOWED_PAIR_COUNTS: [usize; 3] = [4, 6, 8];

/// Default delay before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(500);

/// Difficulty level. Each level maps to a fixed pair count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4 pairs (8 cards).
    #[default]
    Easy,
    /// 6 pairs (12 cards).
    Medium,
    /// 8 pairs (16 cards).
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of pairs dealt at this level.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Look up the level for a pair count.
    pub fn from_pair_count(pair_count: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.pair_count() == pair_count)
            .ok_or(GameError::UnsupportedPairCount(pair_count))
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts a level name (any case) or its pair count.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(pairs) = trimmed.parse::<usize>() {
            return Self::from_pair_count(pairs);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(trimmed.to_string())),
        }
    }
}

/// Move-count thresholds for the end-of-game rating.
///
/// With `pair_count` pairs, a game finished in exactly `pair_count` moves is
/// rated best; otherwise the first factor whose multiple of `pair_count` the
/// move count does not exceed picks the tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// `moves <= good_factor * pairs` rates good.
    pub good_factor: u32,
    /// `moves <= fair_factor * pairs` rates fair.
    pub fair_factor: u32,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            good_factor: 2,
            fair_factor: 3,
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty of new sessions.
    pub difficulty: Difficulty,

    /// How long a mismatched pair stays face-up before flipping back.
    pub mismatch_delay: Duration,

    /// End-of-game rating tiers.
    pub rating: RatingThresholds,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            rating: RatingThresholds::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the rating thresholds.
    #[must_use]
    pub fn with_rating(mut self, rating: RatingThresholds) -> Self {
        self.rating = rating;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
