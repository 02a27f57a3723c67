//! Read-only view of a session for presentation layers.

use serde::{Deserialize, Serialize};

use super::phase::{Phase, SessionId};
use super::session::{CardFace, GameSession};
use crate::core::clock::Timestamp;

/// Everything a renderer needs to draw the board and the stats line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionId,
    pub phase: Phase,
    pub faces: Vec<CardFace>,
    pub move_count: u32,
    pub match_count: u32,
    pub pair_count: usize,
    pub elapsed_secs: u64,
    pub efficiency_percent: f64,
}

impl SessionSnapshot {
    /// Capture a session as seen at `now`.
    #[must_use]
    pub fn capture(session: &GameSession, now: Timestamp) -> Self {
        Self {
            session: session.id(),
            phase: session.phase(),
            faces: session.faces().collect(),
            move_count: session.move_count(),
            match_count: session.match_count(),
            pair_count: session.pair_count(),
            elapsed_secs: session.elapsed(now).as_secs(),
            efficiency_percent: session.efficiency_percent(),
        }
    }

    /// One-line stats: moves, matched pairs, time, efficiency.
    #[must_use]
    pub fn stats_line(&self) -> String {
        format!(
            "Moves: {}  Matched: {}/{}  Time: {}s  Efficiency: {:.1}%",
            self.move_count, self.match_count, self.pair_count, self.elapsed_secs, self.efficiency_percent
        )
    }
}
