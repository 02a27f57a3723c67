//! Error types.
//!
//! Only configuration problems are errors. Bad card indices, input during a
//! pending comparison and stale reset tickets all degrade to no-ops and are
//! reported through outcome values instead.

use thiserror::Error;

use crate::cards::Symbol;

/// Errors raised while setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unsupported pair count {0} (expected 4, 6 or 8)")]
    UnsupportedPairCount(usize),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("deck has odd length {0}")]
    OddDeck(usize),

    #[error("symbol id {0} is outside the card alphabet")]
    UnknownSymbol(u8),

    #[error("symbol {symbol} appears {count} times (expected exactly 2)")]
    UnpairedSymbol { symbol: Symbol, count: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
