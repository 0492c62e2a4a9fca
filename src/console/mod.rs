//! Console front end: renders the table, reads answers, and drives the
//! round loop against a `Table`.
//!
//! All I/O goes through the injected reader and writer, so a full session can
//! be scripted in tests.

pub mod prompt;
pub mod render;

use std::io::{BufRead, Write};

use log::info;

pub use prompt::Console;
pub use render::render_table;

use crate::core::{Decision, GameError, Replay, RoundRecord, Table, TableConfig};
use crate::rules::Outcome;

/// Play rounds until the player declines a replay.
///
/// Returns a record of every completed round.
pub fn run<R: BufRead, W: Write>(
    config: TableConfig,
    input: R,
    output: W,
) -> Result<Vec<RoundRecord>, GameError> {
    let mut table = Table::new(config);
    let mut console = Console::new(input, output, table.config().clear_screen);
    let mut records = Vec::new();

    loop {
        play_round(&mut table, &mut console)?;
        if let Some(record) = table.record() {
            records.push(record);
        }
        if console.ask_replay()? == Replay::No {
            break;
        }
    }

    console.say("Thank you for playing Twenty-One!")?;
    console.say("Good-bye!")?;
    let wins = records.iter().filter(|r| r.outcome.player_won()).count();
    info!("session over after {} rounds, player won {}", records.len(), wins);
    Ok(records)
}

/// Deal, let the player act, let the dealer act, and announce the result.
pub fn play_round<R: BufRead, W: Write>(
    table: &mut Table,
    console: &mut Console<R, W>,
) -> Result<Outcome, GameError> {
    table.start_round()?;
    console.show_table(table)?;

    if console.ask_decision()? == Decision::Hit {
        loop {
            table.hit()?;
            console.show_table(table)?;
            if table.player().is_busted() || console.ask_decision()? == Decision::Stay {
                break;
            }
        }
    }

    if table.player().is_busted() {
        console.say("YOU BUSTED")?;
    } else {
        table.stand()?;
        table.play_dealer()?;
        console.show_table(table)?;
        if table.dealer().is_busted() {
            console.say(&format!("DEALER BUSTED WITH {}", table.dealer().total()))?;
        }
    }

    let outcome = table
        .outcome()
        .ok_or(GameError::RoundInProgress { phase: table.phase() })?;
    console.say(result_banner(outcome))?;
    Ok(outcome)
}

/// Banner printed at the end of a round.
#[must_use]
pub fn result_banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::DealerWon => "<<<<<<<<<<<DEALER WON>>>>>>>>>>>",
        Outcome::PlayerWon => "<<<<<<<<<<<YOU WON>>>>>>>>>>>",
        Outcome::Tie => "<<<<<<<<<<<TIE>>>>>>>>>>>",
    }
}
