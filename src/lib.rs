//! # twenty-one
//!
//! A console Twenty-One (Blackjack) game: one player against a computer dealer.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Scoring, dealer policy and outcome are pure functions of
//!    the cards. The `Table` state machine applies them and never touches I/O.
//!
//! 2. **Composition over roles**: Player and dealer each own a `Hand`; the
//!    dealer's strategy is a free function, not an override.
//!
//! 3. **Injected I/O**: `console::run` takes any `BufRead`/`Write`, so whole
//!    sessions run under test with scripted input.
//!
//! ## Modules
//!
//! - `cards`: Card, Deck, Hand
//! - `rules`: scoring, dealer policy, outcome
//! - `core`: RNG, configuration, answers, seats, table state machine, errors
//! - `console`: rendering, prompts, and the session loop

pub mod cards;
pub mod console;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, Hand, Rank, Suit, DECK_SIZE};

pub use crate::core::{
    draw_and_add, Dealer, Decision, DeckPolicy, GameError, GameRng, GameRngState, Phase,
    Player, Replay, RoundRecord, Seat, Table, TableConfig,
};

pub use crate::rules::{determine_outcome, score, should_hit, Outcome, Score};

pub use crate::console::run;
