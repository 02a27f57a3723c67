//! Card faces and the dealt deck.
//!
//! ## Key Types
//!
//! - `Symbol`: Identifier of a card face, printed as a glyph
//! - `Deck`: Shuffled row of symbols, each exactly twice

pub mod deck;
pub mod symbol;

pub use deck::Deck;
pub use symbol::{Symbol, ALPHABET};
