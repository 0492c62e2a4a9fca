//! Line-oriented console over any reader/writer pair.

use std::io::{BufRead, Write};

use log::trace;

use super::render::render_table;
use crate::core::{Decision, GameError, Replay, Table};

/// ANSI clear-screen and cursor-home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub const HIT_OR_STAY_PROMPT: &str = "Would you like to hit or stay? (h/s)";
pub const INVALID_ANSWER: &str = "Please insert a valid answer.";
pub const PLAY_AGAIN_PROMPT: &str = "Would you like to play again? (y/n)";

/// Console adapter the session loop talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", text).map_err(GameError::io)
    }

    /// Redraw the table, clearing the screen first if configured.
    pub fn show_table(&mut self, table: &Table) -> Result<(), GameError> {
        if self.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes()).map_err(GameError::io)?;
        }
        self.output
            .write_all(render_table(table).as_bytes())
            .map_err(GameError::io)
    }

    /// Ask until the player answers `h` or `s`.
    pub fn ask_decision(&mut self) -> Result<Decision, GameError> {
        loop {
            self.say(HIT_OR_STAY_PROMPT)?;
            let line = self.read_line()?;
            if let Some(decision) = Decision::parse(&line) {
                return Ok(decision);
            }
            self.say(INVALID_ANSWER)?;
        }
    }

    /// Ask until the player answers `y` or `n`. Invalid answers just repeat
    /// the question.
    pub fn ask_replay(&mut self) -> Result<Replay, GameError> {
        loop {
            self.say(PLAY_AGAIN_PROMPT)?;
            let line = self.read_line()?;
            if let Some(replay) = Replay::parse(&line) {
                return Ok(replay);
            }
        }
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        self.output.flush().map_err(GameError::io)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(GameError::io)?;
        if read == 0 {
            return Err(GameError::InputClosed);
        }
        trace!("input {:?}", line);
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new(), false)
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.output).unwrap()
    }

    #[test]
    fn test_decision_reprompts_on_invalid() {
        let mut con = console("x\nH\nh\n");

        assert_eq!(con.ask_decision().unwrap(), Decision::Hit);

        let text = output(con);
        assert_eq!(text.matches(HIT_OR_STAY_PROMPT).count(), 3);
        assert_eq!(text.matches(INVALID_ANSWER).count(), 2);
    }

    #[test]
    fn test_replay_reprompts_silently() {
        let mut con = console("maybe\nn\n");

        assert_eq!(con.ask_replay().unwrap(), Replay::No);

        let text = output(con);
        assert_eq!(text.matches(PLAY_AGAIN_PROMPT).count(), 2);
        assert!(!text.contains(INVALID_ANSWER));
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut con = console("");
        assert!(matches!(con.ask_decision(), Err(GameError::InputClosed)));

        let mut con = console("z\n");
        assert!(matches!(con.ask_replay(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut con = console("s");
        assert_eq!(con.ask_decision().unwrap(), Decision::Stay);
    }

    #[test]
    fn test_clear_screen_escape() {
        let table = Table::new(crate::core::TableConfig::default().with_seed(3));

        let mut con = Console::new(&b""[..], Vec::new(), true);
        con.show_table(&table).unwrap();
        assert!(String::from_utf8(con.output).unwrap().starts_with(CLEAR_SCREEN));

        let mut con = Console::new(&b""[..], Vec::new(), false);
        con.show_table(&table).unwrap();
        assert!(String::from_utf8(con.output).unwrap().starts_with("             CARDS"));
    }
}
