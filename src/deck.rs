//! Deck construction, shuffling, and drawing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single ordered deck of cards.
///
/// A fresh deck holds all 52 (rank, suit) combinations exactly once. Cards
/// are drawn from the top (the end of the sequence) and are moved out, never
/// copied, so a card can appear in at most one place at a time.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical suit-major order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a full deck shuffled with the provided RNG.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` when the deck is empty; a partial or placeholder card
    /// is never produced.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards remaining, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck with a fixed order, top card last. Intended for
    /// deterministic setups in tests and replays.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
