//! Game rules: scoring, dealer policy, and outcome.
//!
//! Everything here is a pure function of the cards involved. The table calls
//! into these rules but never re-derives them.

pub mod dealer;
pub mod outcome;
pub mod score;

pub use dealer::{should_hit, DEALER_THRESHOLD};
pub use outcome::{determine_outcome, Outcome};
pub use score::{score, Score, BUST_THRESHOLD};
