//! Held cards in draw order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::rules::score::{score, Score};

/// Cards held by the player or the dealer, in the order they were drawn.
///
/// The total is never cached: every query rescores the current cards.
/// SmallVec keeps typical hands (rarely more than 8 cards) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand holding exactly the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    /// Append a drawn card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Replace the held cards with an opening pair.
    pub fn replace_with(&mut self, pair: [Card; 2]) {
        self.cards.clear();
        self.cards.extend(pair);
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Most recently drawn card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Score the current cards.
    #[must_use]
    pub fn score(&self) -> Score {
        score(&self.cards)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.score().total
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.score().busted
    }
}
