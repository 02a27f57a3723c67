//! Scheduled auto-reset of a mismatched pair.

use serde::{Deserialize, Serialize};

use crate::core::clock::Timestamp;
use crate::game::SessionId;

/// A pending "flip the mismatched pair back" event.
///
/// The ticket is bound to the session that produced the mismatch. Firing it
/// after that session was replaced is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    /// Session the mismatch happened in.
    pub session: SessionId,
    /// Earliest time the reset may fire.
    pub due: Timestamp,
}

impl ResetTicket {
    #[must_use]
    pub const fn new(session: SessionId, due: Timestamp) -> Self {
        Self { session, due }
    }

    /// Whether the delay has elapsed at `now`.
    #[must_use]
    pub fn is_due(&self, now: Timestamp) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_due() {
        let ticket = ResetTicket::new(SessionId::new(0), Timestamp::from_millis(500));
        assert!(!ticket.is_due(Timestamp::from_millis(499)));
        assert!(ticket.is_due(Timestamp::from_millis(500)));
        assert!(ticket.is_due(Timestamp::from_millis(10_000)));
    }
}
