//! Core game types: RNG, configuration, answers, seats, and the table.
//!
//! The table is the only stateful piece. It owns the deck and both seats and
//! moves a round through its phases; everything it decides comes from `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod participant;
pub mod rng;
pub mod table;

pub use action::{Decision, Replay};
pub use config::{DeckPolicy, TableConfig};
pub use error::GameError;
pub use participant::{draw_and_add, Dealer, Player, Seat};
pub use rng::{GameRng, GameRngState};
pub use table::{Phase, RoundRecord, Table};
