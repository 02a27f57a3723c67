//! Card symbols.
//!
//! A `Symbol` is an index into the fixed `ALPHABET` of glyphs. Two cards
//! match when they carry the same symbol.

use serde::{Deserialize, Serialize};

/// Glyphs printed on card faces, in deal order.
///
/// A session with `n` pairs uses the first `n` entries.
pub const ALPHABET: [&str; 13] = [
    "🛐", "⚛️", "✡️", "☸️", "☯️", "✝️", "☦️", "☪️", "🕎", "🔯", "🪯", "☮️", "🕉️",
];

/// Identifier of a card face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The glyph printed on the card, or `"?"` outside the alphabet.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        ALPHABET.get(self.0 as usize).copied().unwrap_or("?")
    }

    /// The first `count` symbols of the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the alphabet size.
    pub fn first(count: usize) -> impl Iterator<Item = Symbol> {
        assert!(count <= ALPHABET.len(), "Alphabet has only {} symbols", ALPHABET.len());
        (0..count as u8).map(Symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
