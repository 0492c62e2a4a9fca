//! Table configuration.
//!
//! Rule constants (bust at 21, dealer stands at 17) are fixed in `rules`.
//! This only covers how a session is run: seeding, what happens to the deck
//! between rounds, and whether the screen is cleared before each redraw.

use serde::{Deserialize, Serialize};

/// What happens to the deck when a new round starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckPolicy {
    /// Build a fresh 52-card deck for every round.
    #[default]
    FreshEachRound,
    /// Keep drawing from the same deck across rounds until it runs out.
    Persistent,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Deck handling between rounds.
    pub deck_policy: DeckPolicy,

    /// Clear the terminal before each table redraw.
    pub clear_screen: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            deck_policy: DeckPolicy::default(),
            clear_screen: true,
        }
    }
}

impl TableConfig {
    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }

    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.deck_policy, DeckPolicy::FreshEachRound);
        assert!(config.clear_screen);
    }

    #[test]
    fn test_builder() {
        let config = TableConfig::default()
            .with_seed(7)
            .with_deck_policy(DeckPolicy::Persistent)
            .with_clear_screen(false);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.deck_policy, DeckPolicy::Persistent);
        assert!(!config.clear_screen);
    }

    #[test]
    fn test_config_serde() {
        let config = TableConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
