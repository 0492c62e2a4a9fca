//! The 52-card draw pool.
//!
//! A `Deck` only ever shrinks: cards leave through `draw_random` and never
//! come back. Starting over means building a new deck.

use log::trace;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Pool of undrawn cards.
///
/// Order carries no meaning; draws pick uniformly from whatever remains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full deck: one card for every (rank, suit) pair.
    #[must_use]
    pub fn new() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Remove and return a uniformly random card.
    ///
    /// Returns `None` once the deck is empty.
    pub fn draw_random(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.cards.len());
        let card = self.cards.swap_remove(index);
        trace!("drew {} ({} left)", card, self.cards.len());
        Some(card)
    }

    /// Take a specific card out of the pool. Returns false if it was not there.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(pos) => {
                self.cards.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remaining cards, in no meaningful order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(deck.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn test_draw_removes_card() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(42);

        let card = deck.draw_random(&mut rng).unwrap();

        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.contains(&card));
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::new();
        let mut rng = GameRng::new(3);
        let mut drawn = HashSet::new();

        while let Some(card) = deck.draw_random(&mut rng) {
            assert!(drawn.insert(card), "card drawn twice: {}", card);
        }

        assert!(deck.is_empty());
        assert_eq!(drawn.len(), DECK_SIZE);
        assert_eq!(deck.draw_random(&mut rng), None);
    }

    #[test]
    fn test_remove_specific_card() {
        let mut deck = Deck::new();
        let ace = Card::new(Rank::Ace, Suit::Spades);

        assert!(deck.remove(&ace));
        assert!(!deck.remove(&ace));
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut deck1 = Deck::new();
        let mut deck2 = Deck::new();
        let mut rng1 = GameRng::new(1234);
        let mut rng2 = GameRng::new(1234);

        for _ in 0..10 {
            assert_eq!(deck1.draw_random(&mut rng1), deck2.draw_random(&mut rng2));
        }
    }
}
