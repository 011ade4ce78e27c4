//! What a strategy is allowed to see.
//!
//! A `GameView` is an owned snapshot of `GameState` seen from one seat.
//! Every per-player collection is re-indexed so the viewer sits at index 0,
//! followed by the seats they pass to, in order. Index 1 is the player who
//! will receive the viewer's hand next turn.
//!
//! On the first turn of a round, opponents' hands are replaced by `Hidden`
//! cards of the same length: hand sizes are public, contents are not.

use im::Vector;

use super::player::PlayerId;
use super::record::PlayRecord;
use super::state::GameState;
use crate::cards::Card;

/// Snapshot of the game from one player's seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    /// Seat of the viewing player.
    pub player: PlayerId,

    /// Current round (0, 1 or 2).
    pub round_num: u8,

    /// Current turn within the round.
    pub turn: u8,

    /// Hands, viewer first. Masked opponents hold only `Card::Hidden`.
    pub hands: Vec<Vec<Card>>,

    /// Played piles this round, viewer first.
    pub played: Vec<Vec<Card>>,

    /// Pudding counts, viewer first.
    pub puddings: Vec<u32>,

    /// Scores, viewer first.
    pub scores: Vec<i32>,

    /// Cards discarded in earlier rounds.
    pub discard: Vector<Card>,

    /// Every play revealed so far.
    pub history: Vector<PlayRecord>,
}

impl GameView {
    /// Build the view of `state` from `player`'s seat.
    ///
    /// With `mask_opponents`, every other hand is replaced by hidden
    /// placeholders of the same length.
    #[must_use]
    pub fn new(state: &GameState, player: PlayerId, mask_opponents: bool) -> Self {
        let mut hands = state.hands().relative_to(player);
        if mask_opponents {
            for hand in hands.iter_mut().skip(1) {
                *hand = vec![Card::Hidden; hand.len()];
            }
        }

        Self {
            player,
            round_num: state.round_num,
            turn: state.turn,
            hands,
            played: state.played_piles().relative_to(player),
            puddings: state.puddings().relative_to(player),
            scores: state.scores().relative_to(player),
            discard: state.discard_pile().clone(),
            history: state.history().clone(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// The viewer's own hand.
    #[must_use]
    pub fn my_hand(&self) -> &[Card] {
        &self.hands[0]
    }

    /// The viewer's played pile this round.
    #[must_use]
    pub fn my_played(&self) -> &[Card] {
        &self.played[0]
    }

    /// Whether the viewer may play two cards this turn.
    #[must_use]
    pub fn can_double_play(&self) -> bool {
        self.my_hand().contains(&Card::Chopsticks) && self.my_hand().len() >= 2
    }

    /// Seat of the player `offset` places after the viewer.
    #[must_use]
    pub fn seat_at(&self, offset: usize) -> PlayerId {
        let count = self.player_count();
        PlayerId::new(((self.player.index() + offset) % count) as u8)
    }
}
