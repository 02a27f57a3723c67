//! The memory game state machine.
//!
//! ## Key Types
//!
//! - `GameSession`: One play-through; flip and match bookkeeping
//! - `Phase`: `NotStarted`, `InProgress`, `AwaitingReset`, `Complete`
//! - `RevealOutcome`: What a flip did (or why it was ignored)
//! - `Rating`, `GameSummary`: End-of-game scoring
//! - `SessionSnapshot`: Serializable view for renderers

pub mod metrics;
pub mod phase;
pub mod session;
pub mod snapshot;

pub use metrics::{GameSummary, Rating};
pub use phase::{Phase, SessionId};
pub use session::{CardFace, GameSession, IgnoreReason, RevealOutcome};
pub use snapshot::SessionSnapshot;
