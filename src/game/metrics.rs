//! Derived metrics: elapsed time, efficiency, end-of-game rating.
//!
//! None of these are stored. They are computed from a session on demand.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::session::GameSession;
use crate::core::clock::Timestamp;
use crate::core::config::RatingThresholds;

/// End-of-game rating tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Every comparison was a match.
    Best,
    Good,
    Fair,
    Weak,
}

impl Rating {
    /// Rate a finished game of `pair_count` pairs played in `moves` moves.
    #[must_use]
    pub fn for_moves(moves: u32, pair_count: usize, thresholds: &RatingThresholds) -> Self {
        let moves = u64::from(moves);
        let pairs = pair_count as u64;

        if moves == pairs {
            Rating::Best
        } else if moves <= u64::from(thresholds.good_factor) * pairs {
            Rating::Good
        } else if moves <= u64::from(thresholds.fair_factor) * pairs {
            Rating::Fair
        } else {
            Rating::Weak
        }
    }

    /// Short verdict shown with the final score.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Rating::Best => "🌟 Perfect performance!",
            Rating::Good => "👍 Great performance!",
            Rating::Fair | Rating::Weak => "💪 Keep at it!",
        }
    }

    /// Longer assessment line.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Rating::Best => "🏆 Memory master! You found the optimal solution!",
            Rating::Good => "🥈 Excellent! Your memory is impressive!",
            Rating::Fair => "🥉 Good job! Keep training your memory!",
            Rating::Weak => "📚 Practice more and your memory will keep improving!",
        }
    }
}

impl GameSession {
    /// Time since the first flip, frozen once the game is complete.
    ///
    /// Zero before the first flip.
    #[must_use]
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        match self.started_at() {
            Some(start) => self.ended_at().unwrap_or(now).saturating_since(start),
            None => Duration::ZERO,
        }
    }

    /// Matched pairs per move, as a percentage. Zero before the first move.
    #[must_use]
    pub fn efficiency_percent(&self) -> f64 {
        if self.move_count() == 0 {
            0.0
        } else {
            f64::from(self.match_count()) / f64::from(self.move_count()) * 100.0
        }
    }

    /// Rating of a completed game, `None` while still playing.
    #[must_use]
    pub fn rating(&self, thresholds: &RatingThresholds) -> Option<Rating> {
        self.is_complete()
            .then(|| Rating::for_moves(self.move_count(), self.pair_count(), thresholds))
    }

    /// Final score card of a completed game, `None` while still playing.
    #[must_use]
    pub fn summary(&self, thresholds: &RatingThresholds) -> Option<GameSummary> {
        let rating = self.rating(thresholds)?;
        let ended = self.ended_at()?;
        Some(GameSummary {
            moves: self.move_count(),
            pairs: self.pair_count(),
            elapsed: self.elapsed(ended),
            efficiency_percent: self.efficiency_percent(),
            rating,
        })
    }
}

/// Score card shown when all pairs are found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub moves: u32,
    pub pairs: usize,
    pub elapsed: Duration,
    pub efficiency_percent: f64,
    pub rating: Rating,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🎉 Congratulations! You cleared the board!")?;
        writeln!(f, "  Moves:      {}", self.moves)?;
        writeln!(f, "  Time:       {}s", self.elapsed.as_secs())?;
        writeln!(f, "  Efficiency: {:.1}%", self.efficiency_percent)?;
        writeln!(f, "{}", self.rating.verdict())?;
        write!(f, "{}", self.rating.headline())
    }
}
