//! Table: owns the current session and drives its timed auto-reset.
//!
//! The state machine itself has no notion of time passing. After a
//! mismatch the table records a `ResetTicket`; the presentation layer
//! either calls `Table::tick` when it gets control or fires the ticket from
//! its own timer. Restarting deals a session with a new generation id, so a
//! ticket that outlives its session is recognised and dropped.

mod driver;
pub mod ticket;

pub use driver::Table;
pub use ticket::ResetTicket;
