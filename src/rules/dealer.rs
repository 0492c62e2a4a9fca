//! Fixed dealer strategy: hit while under 17, then stand.

use crate::cards::Hand;

/// The dealer keeps drawing while its total is below this.
pub const DEALER_THRESHOLD: u32 = 17;

/// Whether the dealer must draw another card.
#[must_use]
pub fn should_hit(hand: &Hand) -> bool {
    hand.total() < DEALER_THRESHOLD
}
