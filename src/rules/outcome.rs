//! Round outcome.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;

/// Result of a settled round, from the table's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    DealerWon,
    PlayerWon,
    Tie,
}

impl Outcome {
    /// Check if the player won.
    #[must_use]
    pub fn player_won(self) -> bool {
        self == Outcome::PlayerWon
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::DealerWon => "dealer won",
            Outcome::PlayerWon => "player won",
            Outcome::Tie => "tie",
        };
        f.write_str(text)
    }
}

/// Decide the round.
///
/// A busted player loses before anything else is compared, so a round where
/// both sides bust goes to the dealer. A busted dealer loses to any player
/// still standing, whatever the totals.
#[must_use]
pub fn determine_outcome(player: &Hand, dealer: &Hand) -> Outcome {
    let player = player.score();
    let dealer = dealer.score();

    if player.busted || (!dealer.busted && player.total < dealer.total) {
        Outcome::DealerWon
    } else if dealer.busted || player.total > dealer.total {
        Outcome::PlayerWon
    } else {
        Outcome::Tie
    }
}
