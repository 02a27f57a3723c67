//! The dealt deck: an ordered row of symbols, each appearing exactly twice.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::symbol::{Symbol, ALPHABET};
use crate::core::config::ALLOWED_PAIR_COUNTS;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Shuffled cards of one session. Index `i` is the card at grid position `i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Deal `pair_count` pairs from the alphabet and shuffle them.
    ///
    /// Fails with `UnsupportedPairCount` unless `pair_count` is 4, 6 or 8.
    pub fn deal(pair_count: usize, rng: &mut GameRng) -> Result<Self> {
        if !ALLOWED_PAIR_COUNTS.contains(&pair_count) {
            return Err(GameError::UnsupportedPairCount(pair_count));
        }

        let mut cards: Vec<Symbol> = Symbol::first(pair_count)
            .chain(Symbol::first(pair_count))
            .collect();
        rng.shuffle(&mut cards);

        Ok(Self { cards })
    }

    /// Use a fixed card order (deterministic tests, replays).
    ///
    /// The order is validated: even length, only alphabet symbols, every
    /// symbol exactly twice, and an allowed pair count.
    pub fn from_symbols(cards: Vec<Symbol>) -> Result<Self> {
        if cards.len() % 2 != 0 {
            return Err(GameError::OddDeck(cards.len()));
        }

        if let Some(unknown) = cards.iter().find(|s| s.raw() as usize >= ALPHABET.len()) {
            return Err(GameError::UnknownSymbol(unknown.raw()));
        }

        let mut unpaired: Vec<(Symbol, usize)> = count_symbols(&cards)
            .into_iter()
            .filter(|&(_, count)| count != 2)
            .collect();
        unpaired.sort_unstable();
        if let Some(&(symbol, count)) = unpaired.first() {
            return Err(GameError::UnpairedSymbol { symbol, count });
        }

        let pair_count = cards.len() / 2;
        if !ALLOWED_PAIR_COUNTS.contains(&pair_count) {
            return Err(GameError::UnsupportedPairCount(pair_count));
        }

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards. Never true for a validated deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Symbol at a grid position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cards.get(index).copied()
    }

    /// All symbols in grid order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.cards
    }

    /// How many times each symbol occurs.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        count_symbols(&self.cards)
    }
}

fn count_symbols(cards: &[Symbol]) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for &symbol in cards {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}
