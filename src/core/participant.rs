//! The two seats at the table.
//!
//! Player and dealer share everything through their `Hand`; the dealer only
//! adds the opening two-card deal. Its hit/stand policy lives in
//! `rules::dealer`, not here.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::GameRng;
use crate::cards::{Card, Deck, Hand};

/// Take a card out of the deck and put it in the hand in one step.
pub fn draw_and_add(hand: &mut Hand, deck: &mut Deck, rng: &mut GameRng) -> Result<Card, GameError> {
    let card = deck.draw_random(rng).ok_or(GameError::DeckExhausted)?;
    hand.push(card);
    Ok(card)
}

/// Which side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => f.write_str("PLAYER"),
            Seat::Dealer => f.write_str("DEALER"),
        }
    }
}

/// The human side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub hand: Hand,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one card into this hand.
    pub fn hit(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<Card, GameError> {
        draw_and_add(&mut self.hand, deck, rng)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }
}

/// The computer side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    pub hand: Hand,
}

impl Dealer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw an opening pair for either seat.
    ///
    /// The cards are returned, not kept; the caller installs them.
    pub fn deal(&self, deck: &mut Deck, rng: &mut GameRng) -> Result<[Card; 2], GameError> {
        let first = deck.draw_random(rng).ok_or(GameError::DeckExhausted)?;
        let second = deck.draw_random(rng).ok_or(GameError::DeckExhausted)?;
        Ok([first, second])
    }

    /// Draw one card into this hand.
    pub fn hit(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<Card, GameError> {
        draw_and_add(&mut self.hand, deck, rng)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }
}
