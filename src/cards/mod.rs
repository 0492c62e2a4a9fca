//! Cards, the deck they are drawn from, and the hands that hold them.
//!
//! - `Card`: immutable rank + suit
//! - `Deck`: the 52-card pool, shrinking by random draws
//! - `Hand`: held cards in draw order

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
