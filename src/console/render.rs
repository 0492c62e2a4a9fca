//! Text rendering of the table.

use crate::cards::Hand;
use crate::core::{Seat, Table};

/// Placeholder shown instead of the dealer's last card.
pub const HIDDEN: &str = "HIDDEN";

/// Render both hands and the player's score.
///
/// The dealer's most recent card is always hidden, even after the round has
/// been decided.
#[must_use]
pub fn render_table(table: &Table) -> String {
    let player = &table.player().hand;
    let dealer = &table.dealer().hand;

    let mut out = String::new();
    out.push_str("             CARDS\n");
    out.push_str(&format!("{} |{}\n", Seat::Player, cells(player, false)));
    out.push_str(&format!("{} |{}| {}\n", Seat::Dealer, cells(dealer, true), HIDDEN));
    out.push_str(&format!("PLAYER SCORE: {}\n", player.total()));
    out
}

fn cells(hand: &Hand, hide_last: bool) -> String {
    let shown = if hide_last {
        hand.len().saturating_sub(1)
    } else {
        hand.len()
    };
    hand.cards()
        .iter()
        .take(shown)
        .map(|card| format!("|  {}  ", card))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::TableConfig;

    #[test]
    fn test_render_hides_dealer_last_card() {
        let table = Table::from_position(
            TableConfig::default().with_seed(1),
            &[Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)],
            &[Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Eight, Suit::Diamonds)],
        )
        .unwrap();

        let text = render_table(&table);

        assert_eq!(
            text,
            "             CARDS\n\
             PLAYER ||  A♠  |  K♥  \n\
             DEALER ||  9♣  | HIDDEN\n\
             PLAYER SCORE: 21\n"
        );
        assert!(!text.contains("8♦"));
    }

    #[test]
    fn test_render_longer_dealer_hand() {
        let table = Table::from_position(
            TableConfig::default().with_seed(1),
            &[Card::new(Rank::Two, Suit::Spades), Card::new(Rank::Three, Suit::Spades)],
            &[
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Four, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Clubs),
            ],
        )
        .unwrap();

        let text = render_table(&table);

        assert!(text.contains("DEALER ||  2♣  |  4♣  | HIDDEN\n"));
        assert!(!text.contains("10♣"));
        assert!(text.ends_with("PLAYER SCORE: 5\n"));
    }
}
