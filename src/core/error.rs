//! Error type shared by the table and the console adapter.

use snafu::Snafu;

use super::table::Phase;
use crate::cards::Card;

#[derive(Debug, Snafu)]
pub enum GameError {
    #[snafu(display("cannot draw from an empty deck"))]
    DeckExhausted,

    #[snafu(display("table is in phase {:?}, expected {:?}", actual, expected))]
    WrongPhase { expected: Phase, actual: Phase },

    #[snafu(display("round has not been settled (phase {:?})", phase))]
    RoundInProgress { phase: Phase },

    #[snafu(display("card {} dealt twice", card))]
    DuplicateCard { card: Card },

    #[snafu(display("input closed while waiting for an answer"))]
    InputClosed,

    #[snafu(display("console I/O failed: {}", source))]
    Io { source: std::io::Error },
}

impl GameError {
    pub(crate) fn io(source: std::io::Error) -> Self {
        GameError::Io { source }
    }
}
