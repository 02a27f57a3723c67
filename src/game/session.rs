//! The game state machine.
//!
//! A `GameSession` is one play-through: a dealt deck plus the flip and match
//! bookkeeping. It is driven by two events:
//!
//! - `reveal_card`: the player flips a card
//! - `resolve_pending_mismatch`: the mismatch delay has elapsed
//!
//! Neither event can fail. Inputs the current phase does not accept come back
//! as `RevealOutcome::Ignored` and leave the session untouched.
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::{Deck, Symbol};
//! use memory_match::core::Timestamp;
//! use memory_match::game::{GameSession, Phase, RevealOutcome, SessionId};
//!
//! let deck = Deck::from_symbols(
//!     [0, 1, 2, 3, 0, 1, 2, 3].into_iter().map(Symbol::new).collect(),
//! ).unwrap();
//! let mut session = GameSession::from_deck(SessionId::new(0), deck);
//!
//! let now = Timestamp::ZERO;
//! assert_eq!(session.reveal_card(0, now), RevealOutcome::FirstFlipped);
//! assert_eq!(session.reveal_card(4, now), RevealOutcome::Matched { complete: false });
//!
//! assert_eq!(session.reveal_card(1, now), RevealOutcome::FirstFlipped);
//! assert_eq!(session.reveal_card(2, now), RevealOutcome::Mismatched);
//! assert_eq!(session.phase(), Phase::AwaitingReset);
//!
//! assert!(session.resolve_pending_mismatch());
//! assert_eq!(session.phase(), Phase::InProgress);
//! assert_eq!(session.move_count(), 2);
//! ```

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::phase::{Phase, SessionId};
use crate::cards::{Deck, Symbol};
use crate::core::clock::Timestamp;
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// What a player sees at one grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Hidden.
    FaceDown,
    /// Shown. `matched` distinguishes a found pair from a card under comparison.
    FaceUp { symbol: Symbol, matched: bool },
}

impl CardFace {
    /// Whether the card is showing its symbol.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, CardFace::FaceUp { .. })
    }
}

/// Why a flip was not registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Index is not a grid position.
    OutOfRange,
    /// The session is complete.
    GameOver,
    /// Card is already revealed or matched.
    AlreadyFaceUp,
    /// Two cards are already under comparison.
    ComparisonPending,
}

/// Result of a `reveal_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair is face-up.
    FirstFlipped,
    /// Second card matched the first. `complete` is set when this was the last pair.
    Matched { complete: bool },
    /// Second card did not match. Both stay face-up until the pending reset.
    Mismatched,
}

impl RevealOutcome {
    /// Whether the flip was registered.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, RevealOutcome::Ignored(_))
    }
}

/// One play-through of the memory game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    id: SessionId,
    deck: Deck,

    /// Face-up but unmatched. Never more than two.
    revealed: SmallVec<[usize; 2]>,

    /// Permanently face-up.
    matched: OrdSet<usize>,

    pending_first: Option<usize>,
    pending_second: Option<usize>,

    move_count: u32,
    match_count: u32,

    started_at: Option<Timestamp>,
    ended_at: Option<Timestamp>,

    phase: Phase,
}

impl GameSession {
    /// Deal a new session with `pair_count` pairs.
    ///
    /// Fails with `UnsupportedPairCount` unless `pair_count` is 4, 6 or 8.
    pub fn new(id: SessionId, pair_count: usize, rng: &mut GameRng) -> Result<Self> {
        let deck = Deck::deal(pair_count, rng)?;
        Ok(Self::from_deck(id, deck))
    }

    /// Start a session on an already dealt deck.
    #[must_use]
    pub fn from_deck(id: SessionId, deck: Deck) -> Self {
        info!(session = id.0, pairs = deck.pair_count(), "dealt new session");
        Self {
            id,
            deck,
            revealed: SmallVec::new(),
            matched: OrdSet::new(),
            pending_first: None,
            pending_second: None,
            move_count: 0,
            match_count: 0,
            started_at: None,
            ended_at: None,
            phase: Phase::NotStarted,
        }
    }

    // === Events ===

    /// Flip the card at `index`.
    ///
    /// The flip is ignored when the index is out of range, the session is
    /// complete, the card is already face-up, or a mismatched pair is still
    /// waiting to flip back. A mismatch leaves the session in
    /// `AwaitingReset`; the caller is responsible for invoking
    /// `resolve_pending_mismatch` once the configured delay has passed.
    pub fn reveal_card(&mut self, index: usize, now: Timestamp) -> RevealOutcome {
        if let Some(reason) = self.reject_reason(index) {
            debug!(session = self.id.0, index, ?reason, "ignored reveal");
            return RevealOutcome::Ignored(reason);
        }

        if self.phase == Phase::NotStarted {
            self.started_at = Some(now);
            self.phase = Phase::InProgress;
        }

        let Some(first) = self.pending_first else {
            self.pending_first = Some(index);
            self.revealed.push(index);
            debug!(session = self.id.0, index, "flipped first card");
            return RevealOutcome::FirstFlipped;
        };

        self.pending_second = Some(index);
        self.revealed.push(index);
        self.move_count += 1;

        if self.deck.get(first) == self.deck.get(index) {
            self.revealed.retain(|&mut i| i != first && i != index);
            self.matched.insert(first);
            self.matched.insert(index);
            self.match_count += 1;
            self.pending_first = None;
            self.pending_second = None;

            let complete = self.match_count as usize == self.pair_count();
            if complete {
                self.ended_at = Some(now);
                self.phase = Phase::Complete;
                info!(session = self.id.0, moves = self.move_count, "all pairs found");
            } else {
                info!(session = self.id.0, first, second = index, matches = self.match_count, "pair matched");
            }
            RevealOutcome::Matched { complete }
        } else {
            self.phase = Phase::AwaitingReset;
            info!(session = self.id.0, first, second = index, moves = self.move_count, "pair mismatched");
            RevealOutcome::Mismatched
        }
    }

    /// Flip a mismatched pair back face-down.
    ///
    /// Returns `false` without touching the session unless it is in
    /// `AwaitingReset`, so duplicate timer firings are harmless.
    pub fn resolve_pending_mismatch(&mut self) -> bool {
        if self.phase != Phase::AwaitingReset {
            debug!(session = self.id.0, phase = ?self.phase, "no mismatch to resolve");
            return false;
        }

        let first = self.pending_first.take();
        let second = self.pending_second.take();
        self.revealed.retain(|i| Some(*i) != first && Some(*i) != second);
        self.phase = Phase::InProgress;

        info!(session = self.id.0, ?first, ?second, "flipped mismatched pair back");
        true
    }

    fn reject_reason(&self, index: usize) -> Option<IgnoreReason> {
        if index >= self.deck.len() {
            Some(IgnoreReason::OutOfRange)
        } else if self.phase == Phase::Complete {
            Some(IgnoreReason::GameOver)
        } else if self.revealed.contains(&index) || self.matched.contains(&index) {
            Some(IgnoreReason::AlreadyFaceUp)
        } else if self.pending_second.is_some() {
            Some(IgnoreReason::ComparisonPending)
        } else {
            None
        }
    }

    // === Accessors ===

    /// Generation of this session.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The dealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether all pairs have been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Completed comparisons (matches and mismatches).
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pairs found so far.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    /// Time of the first flip.
    #[must_use]
    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Time the last pair was found.
    #[must_use]
    pub fn ended_at(&self) -> Option<Timestamp> {
        self.ended_at
    }

    /// The pair under comparison.
    #[must_use]
    pub fn pending(&self) -> (Option<usize>, Option<usize>) {
        (self.pending_first, self.pending_second)
    }

    /// Whether a card is face-up and unmatched.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Whether a card belongs to a found pair.
    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    /// Face-up, unmatched indices.
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Matched indices, ascending.
    pub fn matched(&self) -> impl Iterator<Item = usize> + '_ {
        self.matched.iter().copied()
    }

    /// What the player sees at `index`, or `None` outside the grid.
    #[must_use]
    pub fn card_face(&self, index: usize) -> Option<CardFace> {
        let symbol = self.deck.get(index)?;
        let face = if self.matched.contains(&index) {
            CardFace::FaceUp { symbol, matched: true }
        } else if self.revealed.contains(&index) {
            CardFace::FaceUp { symbol, matched: false }
        } else {
            CardFace::FaceDown
        };
        Some(face)
    }

    /// Faces of the whole grid in index order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        (0..self.deck.len()).filter_map(|i| self.card_face(i))
    }
}
