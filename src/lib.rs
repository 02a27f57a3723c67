//! # memory-match
//!
//! A card-matching memory game engine.
//!
//! Face-down cards are revealed two at a time; matching pairs stay
//! revealed, mismatched pairs flip back after a delay, and the game ends
//! when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A `GameSession` is a plain value owned by the
//!    caller. There is no global state.
//!
//! 2. **No Hidden Time**: Operations take a `Timestamp`. The auto-reset
//!    after a mismatch is a `ResetTicket` the presentation layer fires via
//!    `Table::tick`, not a sleep.
//!
//! 3. **Deterministic Deals**: Shuffling uses an injected, seeded `GameRng`.
//!
//! 4. **No-op Over Error**: Flips the current phase does not accept are
//!    reported and ignored. Only bad configuration is an error.
//!
//! ## Modules
//!
//! - `core`: RNG, clock, configuration, errors
//! - `cards`: Symbols and deck dealing
//! - `game`: The session state machine and derived metrics
//! - `table`: Current-session owner and reset scheduler

pub mod core;
pub mod cards;
pub mod game;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock, Timestamp,
    Difficulty, GameConfig, RatingThresholds,
    GameError, Result,
    GameRng,
};

pub use crate::cards::{Deck, Symbol};

pub use crate::game::{
    CardFace, GameSession, GameSummary, IgnoreReason, Phase, Rating,
    RevealOutcome, SessionId, SessionSnapshot,
};

pub use crate::table::{ResetTicket, Table};
