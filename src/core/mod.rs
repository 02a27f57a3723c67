//! Core types: RNG, clock, configuration, errors.
//!
//! These are independent of the game rules. The `game` module builds the
//! state machine on top of them and the `table` module drives it.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{Difficulty, GameConfig, RatingThresholds, ALLOWED_PAIR_COUNTS, DEFAULT_MISMATCH_DELAY};
pub use error::{GameError, Result};
pub use rng::GameRng;
