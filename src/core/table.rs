//! The table: one deck, one player, one dealer, and the round state machine.
//!
//! ## Round flow
//!
//! ```text
//! Idle ──start_round──▶ PlayerTurn ──stand──▶ DealerTurn ──play_dealer──▶ Settled
//!                          │  ▲                                              │
//!                          └──┘ hit (bust settles immediately)               │
//!                                                                            │
//!          ◀─────────────────────────── start_round ◀────────────────────────┘
//! ```
//!
//! The table never reads or writes the console. Every transition is a plain
//! method call, so whole rounds can be driven from tests.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::{DeckPolicy, TableConfig};
use super::error::GameError;
use super::participant::{Dealer, Player};
use super::rng::{GameRng, GameRngState};
use crate::cards::{Card, Deck, Hand};
use crate::rules::{determine_outcome, should_hit, Outcome};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round dealt yet.
    Idle,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Player stood; the dealer still has to play.
    DealerTurn,
    /// Round decided.
    Settled(Outcome),
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_total: u32,
    pub dealer_total: u32,
    pub outcome: Outcome,
}

/// Complete game state for one session.
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    rng: GameRng,
    deck: Deck,
    player: Player,
    dealer: Dealer,
    phase: Phase,
    round: u32,
}

impl Table {
    /// Create a table with a full deck and no cards dealt.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("table seeded with {}", rng.seed());

        Self {
            config,
            rng,
            deck: Deck::new(),
            player: Player::new(),
            dealer: Dealer::new(),
            phase: Phase::Idle,
            round: 0,
        }
    }

    /// Create a table mid-round, with the given hands already dealt.
    ///
    /// The dealt cards are taken out of a fresh deck and the player is to act.
    /// Fails with `DuplicateCard` if a card appears twice across the two hands.
    pub fn from_position(
        config: TableConfig,
        player_cards: &[Card],
        dealer_cards: &[Card],
    ) -> Result<Self, GameError> {
        let mut table = Self::new(config);
        for card in player_cards.iter().chain(dealer_cards) {
            if !table.deck.remove(card) {
                return Err(GameError::DuplicateCard { card: *card });
            }
        }
        table.player.hand = Hand::from_cards(player_cards);
        table.dealer.hand = Hand::from_cards(dealer_cards);
        table.phase = Phase::PlayerTurn;
        table.round = 1;
        Ok(table)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number, 0 before the first deal.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// RNG checkpoint, enough to replay the rest of the session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Outcome of the current round, once settled.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    // === Transitions ===

    /// Deal a new round: two cards to the player, then two to the dealer.
    ///
    /// Allowed before the first round and after a round has settled.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Idle | Phase::Settled(_)) {
            return Err(GameError::WrongPhase {
                expected: Phase::Idle,
                actual: self.phase,
            });
        }

        if self.config.deck_policy == DeckPolicy::FreshEachRound {
            self.deck = Deck::new();
        }

        let player_pair = self.dealer.deal(&mut self.deck, &mut self.rng)?;
        self.player.hand.replace_with(player_pair);
        let dealer_pair = self.dealer.deal(&mut self.deck, &mut self.rng)?;
        self.dealer.hand.replace_with(dealer_pair);

        self.round += 1;
        self.phase = Phase::PlayerTurn;
        debug!(
            "round {} dealt: player {:?}, dealer {:?}, {} cards left",
            self.round,
            self.player.hand.cards(),
            self.dealer.hand.cards(),
            self.deck.len()
        );
        Ok(())
    }

    /// Player draws one card. Busting settles the round for the dealer
    /// without the dealer playing.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.expect_phase(Phase::PlayerTurn)?;

        let card = self.player.hit(&mut self.deck, &mut self.rng)?;
        debug!("player hit {} (total {})", card, self.player.total());

        if self.player.is_busted() {
            self.settle();
        }
        Ok(card)
    }

    /// Player stays; the dealer is up.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::PlayerTurn)?;
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Dealer draws until reaching 17 or more, then the round settles.
    ///
    /// Returns the cards the dealer drew, in order.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, GameError> {
        self.expect_phase(Phase::DealerTurn)?;

        let mut drawn = Vec::new();
        while should_hit(&self.dealer.hand) {
            drawn.push(self.dealer.hit(&mut self.deck, &mut self.rng)?);
        }
        debug!("dealer drew {:?} (total {})", drawn, self.dealer.total());

        self.settle();
        Ok(drawn)
    }

    /// Summary of the current round, once settled.
    #[must_use]
    pub fn record(&self) -> Option<RoundRecord> {
        self.outcome().map(|outcome| RoundRecord {
            round: self.round,
            player_cards: self.player.hand.cards().to_vec(),
            dealer_cards: self.dealer.hand.cards().to_vec(),
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
            outcome,
        })
    }

    fn settle(&mut self) {
        let outcome = determine_outcome(&self.player.hand, &self.dealer.hand);
        info!(
            "round {}: {} (player {}, dealer {})",
            self.round,
            outcome,
            self.player.total(),
            self.dealer.total()
        );
        self.phase = Phase::Settled(outcome);
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}
