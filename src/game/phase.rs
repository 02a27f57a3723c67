//! Session phase and identity.

use serde::{Deserialize, Serialize};

/// Where a session is in its flip cycle.
///
/// `NotStarted → InProgress → AwaitingReset ⟲ InProgress → Complete`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card flipped yet. The timer has not started.
    #[default]
    NotStarted,
    /// Accepting flips.
    InProgress,
    /// A mismatched pair is face-up, waiting for the auto-reset.
    AwaitingReset,
    /// All pairs found. Terminal.
    Complete,
}

impl Phase {
    /// Whether the session has reached its terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Complete)
    }
}

/// Generation number of a session within a table.
///
/// Every restart or difficulty change deals a new session with the next id,
/// so a reset scheduled for an older session can be recognised as stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the session dealt after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
