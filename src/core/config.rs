//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::cards::DeckComposition;

/// Rounds in a game.
pub const ROUNDS: u8 = 3;

/// Game configuration parameters.
///
/// Loadable from JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deck shuffle and strategy RNG streams.
    /// Same seed and same strategies produce the same game.
    pub seed: u64,

    /// Cards in a fresh deck.
    pub deck: DeckComposition,

    /// Show opponents' hands as hidden placeholders on the first turn of
    /// each round.
    pub mask_first_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            deck: DeckComposition::default(),
            mask_first_turn: true,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom deck composition.
    pub fn with_deck(mut self, deck: DeckComposition) -> Self {
        self.deck = deck;
        self
    }

    /// Create a new config with first-turn masking switched on or off.
    pub fn with_mask_first_turn(mut self, mask: bool) -> Self {
        self.mask_first_turn = mask;
        self
    }
}
