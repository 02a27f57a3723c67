//! Session owner and reset scheduler.

use tracing::{debug, info};

use super::ticket::ResetTicket;
use crate::core::clock::{Clock, SystemClock, Timestamp};
use crate::core::config::{Difficulty, GameConfig};
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::game::{GameSession, GameSummary, RevealOutcome, SessionId, SessionSnapshot};

/// The current game plus everything needed to replace it.
///
/// A table deals sessions, forwards flips to the current one, and keeps the
/// auto-reset ticket of a pending mismatch. The presentation layer calls
/// `tick` whenever it gets control (or `fire` from its own timer); the
/// table never sleeps or spawns anything.
pub struct Table<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
    rng: GameRng,
    session: GameSession,
    pending_reset: Option<ResetTicket>,
}

impl Table<SystemClock> {
    /// Create a table on the wall clock.
    pub fn with_system_clock(config: GameConfig) -> Result<Self> {
        Self::new(config, SystemClock::new())
    }
}

impl<C: Clock> Table<C> {
    /// Create a table and deal the first session.
    pub fn new(config: GameConfig, clock: C) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deal_rng = rng.fork();
        let session = GameSession::new(SessionId::default(), config.difficulty.pair_count(), &mut deal_rng)?;

        info!(seed = rng.seed(), difficulty = %config.difficulty, "opened table");
        Ok(Self {
            config,
            clock,
            rng,
            session,
            pending_reset: None,
        })
    }

    // === Accessors ===

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current time on the table's clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// The reset waiting to fire, if a mismatch is showing.
    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    /// When the pending reset becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.pending_reset.map(|t| t.due)
    }

    /// Board and stats of the current session, as of now.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.now())
    }

    /// Score card, once the current session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.session.summary(&self.config.rating)
    }

    // === Events ===

    /// Flip a card in the current session.
    ///
    /// A reset that has come due is applied first, so a flip arriving after
    /// the delay is never blocked by a mismatch the UI has not ticked away.
    /// A new mismatch schedules its reset `mismatch_delay` from now.
    pub fn reveal(&mut self, index: usize) -> RevealOutcome {
        self.tick();

        let now = self.now();
        let outcome = self.session.reveal_card(index, now);
        if outcome == RevealOutcome::Mismatched {
            let ticket = ResetTicket::new(self.session.id(), now + self.config.mismatch_delay);
            debug!(session = ticket.session.0, due = %ticket.due, "scheduled reset");
            self.pending_reset = Some(ticket);
        }
        outcome
    }

    /// Fire the pending reset if its delay has elapsed.
    ///
    /// Returns whether a mismatched pair was flipped back. Safe to call at
    /// any rate.
    pub fn tick(&mut self) -> bool {
        let Some(ticket) = self.pending_reset else {
            return false;
        };
        ticket.is_due(self.now()) && self.fire(ticket)
    }

    /// Apply a reset ticket immediately.
    ///
    /// For callers that run their own timer: hand back the ticket from
    /// `pending_reset` when it expires. Only the currently pending ticket is
    /// honoured; one from a replaced session or an already resolved
    /// mismatch is ignored.
    pub fn fire(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset != Some(ticket) {
            debug!(
                ticket = ticket.session.0,
                due = %ticket.due,
                current = self.session.id().0,
                "ignored stale reset ticket"
            );
            return false;
        }

        self.pending_reset = None;
        self.session.resolve_pending_mismatch()
    }

    /// Deal a fresh session at the current difficulty.
    pub fn restart(&mut self) -> Result<SessionId> {
        self.deal(self.config.difficulty)
    }

    /// Switch difficulty and deal a fresh session.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<SessionId> {
        self.deal(difficulty)
    }

    fn deal(&mut self, difficulty: Difficulty) -> Result<SessionId> {
        let id = self.session.id().next();
        let mut deal_rng = self.rng.fork();
        let session = GameSession::new(id, difficulty.pair_count(), &mut deal_rng)?;

        self.config.difficulty = difficulty;
        self.session = session;
        self.pending_reset = None;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::clock::ManualClock;
    use crate::game::Phase;

    fn table(clock: &ManualClock) -> Table<ManualClock> {
        let config = GameConfig::default().with_seed(42);
        Table::new(config, clock.clone()).unwrap()
    }

    /// Two indices holding different symbols.
    fn mismatched_pair(session: &GameSession) -> (usize, usize) {
        let deck = session.deck();
        let second = (1..deck.len())
            .find(|&i| deck.get(i) != deck.get(0))
            .unwrap();
        (0, second)
    }

    #[test]
    fn test_new_table() {
        let clock = ManualClock::new();
        let t = table(&clock);

        assert_eq!(t.session().id(), SessionId::new(0));
        assert_eq!(t.session().pair_count(), 4);
        assert_eq!(t.pending_reset(), None);
        assert!(t.summary().is_none());
    }

    #[test]
    fn test_mismatch_schedules_reset() {
        let clock = ManualClock::new();
        let mut t = table(&clock);
        let (a, b) = mismatched_pair(t.session());

        clock.advance(Duration::from_millis(100));
        t.reveal(a);
        assert_eq!(t.reveal(b), RevealOutcome::Mismatched);
        assert_eq!(t.next_deadline(), Some(Timestamp::from_millis(600)));

        clock.advance(Duration::from_millis(499));
        assert!(!t.tick());
        assert_eq!(t.session().phase(), Phase::AwaitingReset);

        clock.advance(Duration::from_millis(1));
        assert!(t.tick());
        assert_eq!(t.session().phase(), Phase::InProgress);
        assert_eq!(t.pending_reset(), None);
        assert!(!t.tick());
    }

    #[test]
    fn test_reveal_applies_due_reset() {
        let clock = ManualClock::new();
        let mut t = table(&clock);
        let (a, b) = mismatched_pair(t.session());

        t.reveal(a);
        t.reveal(b);
        clock.advance(Duration::from_secs(1));

        // No explicit tick: the flip itself clears the expired mismatch
        assert_eq!(t.reveal(a), RevealOutcome::FirstFlipped);
        assert_eq!(t.session().move_count(), 1);
    }

    #[test]
    fn test_restart_switches_session() {
        let clock = ManualClock::new();
        let mut t = table(&clock);
        let first_deck = t.session().deck().clone();

        let id = t.restart().unwrap();
        assert_eq!(id, SessionId::new(1));
        assert_eq!(t.session().id(), id);
        assert_eq!(t.session().phase(), Phase::NotStarted);

        // Each restart reshuffles
        let mut decks = vec![t.session().deck().clone()];
        for _ in 0..3 {
            t.restart().unwrap();
            decks.push(t.session().deck().clone());
        }
        assert!(decks.iter().any(|d| d != &first_deck));
        assert_eq!(t.session().id(), SessionId::new(4));
    }

    #[test]
    fn test_set_difficulty() {
        let clock = ManualClock::new();
        let mut t = table(&clock);

        t.set_difficulty(Difficulty::Hard).unwrap();
        assert_eq!(t.session().pair_count(), 8);
        assert_eq!(t.config().difficulty, Difficulty::Hard);

        t.restart().unwrap();
        assert_eq!(t.session().pair_count(), 8);
    }
}
