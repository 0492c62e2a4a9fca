//! Hand scoring with Ace high/low resolution.
//!
//! Non-Aces are summed first. Aces are then added one at a time: each Ace
//! counts 11 unless that would push the running total past 21, in which case
//! it counts 1. Each Ace is judged against the total accumulated so far, not
//! against the final total.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Totals above this are bust.
pub const BUST_THRESHOLD: u32 = 21;
/// Ace counted high (soft).
pub const ACE_HIGH: u32 = 11;
/// Ace counted low (hard).
pub const ACE_LOW: u32 = 1;
/// Value of J, Q and K.
pub const FACE_CARD_VALUE: u32 = 10;

/// Scored hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub total: u32,
    pub busted: bool,
}

/// Score any sequence of cards.
///
/// ```
/// use twenty_one::cards::{Card, Rank, Suit};
/// use twenty_one::rules::score;
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(score(&hand).total, 12);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> Score {
    let (aces, others): (Vec<&Card>, Vec<&Card>) = cards.iter().partition(|c| c.rank.is_ace());

    let mut total: u32 = others
        .iter()
        .map(|c| c.rank.pip_value().unwrap_or(FACE_CARD_VALUE))
        .sum();

    for _ in aces {
        total += ace_high_or_low(total);
    }

    Score {
        total,
        busted: total > BUST_THRESHOLD,
    }
}

/// Value of the next Ace given the running total before it.
#[must_use]
pub fn ace_high_or_low(running_total: u32) -> u32 {
    if running_total + ACE_HIGH > BUST_THRESHOLD {
        ACE_LOW
    } else {
        ACE_HIGH
    }
}
