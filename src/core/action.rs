//! Answers the player gives at the two prompts.
//!
//! Tokens are exact and case-sensitive: only the trailing line ending is
//! stripped before matching.

use serde::{Deserialize, Serialize};

/// Answer to "hit or stay".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Hit,
    Stay,
}

impl Decision {
    /// Parse a raw input line. Returns `None` for anything but `h` or `s`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match chomp(line) {
            "h" => Some(Decision::Hit),
            "s" => Some(Decision::Stay),
            _ => None,
        }
    }
}

/// Answer to "play again".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Replay {
    Yes,
    No,
}

impl Replay {
    /// Parse a raw input line. Returns `None` for anything but `y` or `n`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match chomp(line) {
            "y" => Some(Replay::Yes),
            "n" => Some(Replay::No),
            _ => None,
        }
    }
}

/// Strip one trailing `\n` or `\r\n`.
fn chomp(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_tokens() {
        assert_eq!(Decision::parse("h\n"), Some(Decision::Hit));
        assert_eq!(Decision::parse("s\r\n"), Some(Decision::Stay));
        assert_eq!(Decision::parse("s"), Some(Decision::Stay));
    }

    #[test]
    fn test_decision_rejects_others() {
        assert_eq!(Decision::parse("H\n"), None);
        assert_eq!(Decision::parse(" h\n"), None);
        assert_eq!(Decision::parse("h \n"), None);
        assert_eq!(Decision::parse("hit\n"), None);
        assert_eq!(Decision::parse("\n"), None);
    }

    #[test]
    fn test_replay_tokens() {
        assert_eq!(Replay::parse("y\n"), Some(Replay::Yes));
        assert_eq!(Replay::parse("n\n"), Some(Replay::No));
        assert_eq!(Replay::parse("yes\n"), None);
        assert_eq!(Replay::parse("N\n"), None);
    }

    #[test]
    fn test_chomp_only_one_line_ending() {
        assert_eq!(chomp("h\n\n"), "h\n");
        assert_eq!(chomp("h"), "h");
    }
}
