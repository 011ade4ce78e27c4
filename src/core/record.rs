//! Play history.
//!
//! Every applied play is recorded with the round and turn it happened on.
//! Used for diagnostics and by strategies that track what has been revealed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// Cards a strategy chose for one turn: one normally, two with chopsticks.
pub type Play = SmallVec<[Card; 2]>;

/// A revealed play with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// The player who made this play.
    pub player: PlayerId,

    /// Round number (0-based).
    pub round: u8,

    /// Turn within the round (0-based).
    pub turn: u8,

    /// The cards played.
    pub cards: Play,
}

impl PlayRecord {
    /// Create a new play record.
    #[must_use]
    pub fn new(player: PlayerId, round: u8, turn: u8, cards: Play) -> Self {
        Self {
            player,
            round,
            turn,
            cards,
        }
    }

    /// Whether chopsticks were used for this play.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.cards.len() == 2
    }
}
