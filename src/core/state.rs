//! Game state.
//!
//! ## GameState
//!
//! Owns every per-player collection of a game in progress:
//! - Hands (reset each round)
//! - Played piles (cleared when the round is scored)
//! - Pudding counts and scores (persist for the whole game)
//! - Discard pile and play history (only grow)
//!
//! Strategies never see this type; they get a `GameView` snapshot.
//!
//! Within a round, for every player:
//! `hand + played pile + puddings played this round == hand size dealt`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::record::{Play, PlayRecord};
use crate::cards::{remove_cards, Card};
use crate::error::GameError;

/// Full state of a game in progress.
///
/// Uses `im` vectors for the append-only piles so snapshots stay cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,

    /// Current round (0, 1 or 2).
    pub round_num: u8,

    /// Current turn within the round.
    pub turn: u8,

    hands: PlayerMap<Vec<Card>>,

    played: PlayerMap<Vec<Card>>,

    puddings: PlayerMap<u32>,

    scores: PlayerMap<i32>,

    discard: Vector<Card>,

    history: Vector<PlayRecord>,
}

impl GameState {
    /// Create an empty state for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            round_num: 0,
            turn: 0,
            hands: PlayerMap::with_default(player_count),
            played: PlayerMap::with_default(player_count),
            puddings: PlayerMap::with_value(player_count, 0),
            scores: PlayerMap::with_value(player_count, 0),
            discard: Vector::new(),
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    // === Accessors ===

    /// A player's real hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vec<Card>> {
        &self.hands
    }

    /// Cards a player has played this round (pudding excluded).
    #[must_use]
    pub fn played(&self, player: PlayerId) -> &[Card] {
        &self.played[player]
    }

    #[must_use]
    pub fn played_piles(&self) -> &PlayerMap<Vec<Card>> {
        &self.played
    }

    #[must_use]
    pub fn puddings(&self) -> &PlayerMap<u32> {
        &self.puddings
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i32> {
        &self.scores
    }

    /// Cards removed from play after scoring.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Every play applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    // === Round lifecycle ===

    /// Install freshly dealt hands for `round_num` and reset the turn.
    ///
    /// Played piles must already be empty (see `discard_played`).
    pub fn start_round(&mut self, round_num: u8, hands: PlayerMap<Vec<Card>>) {
        assert_eq!(
            hands.player_count(),
            self.player_count,
            "Dealt hands must match player count"
        );
        debug_assert!(self.played.as_slice().iter().all(Vec::is_empty));

        self.round_num = round_num;
        self.turn = 0;
        self.hands = hands;
    }

    /// Apply one validated play for `player`.
    ///
    /// Removes the cards from the hand, routes pudding to the pudding
    /// counter and everything else to the played pile. A double play then
    /// spends the chopsticks via `use_chopsticks`.
    ///
    /// The hand is checked again before anything changes; on failure the
    /// state is untouched.
    pub fn apply_play(&mut self, player: PlayerId, play: &Play) -> Result<(), GameError> {
        let mut hand = self.hands[player].clone();
        remove_cards(&mut hand, play).map_err(|card| GameError::IllegalCard {
            player,
            card,
            play: play.to_vec(),
            hand: self.hands[player].clone(),
        })?;
        self.hands[player] = hand;

        for &card in play {
            if card == Card::Pudding {
                self.puddings[player] += 1;
            } else {
                self.played[player].push(card);
            }
        }

        if play.len() == 2 {
            self.use_chopsticks(player);
        }

        self.history
            .push_back(PlayRecord::new(player, self.round_num, self.turn, play.clone()));
        Ok(())
    }

    /// Spend a chopsticks after a double play.
    ///
    /// A chopsticks lying in the played pile goes back into the hand, where
    /// it passes on with the rest of the hand and never scores. If the pile
    /// holds none, the chopsticks that enabled the play is still in the
    /// hand and nothing moves.
    ///
    /// Returns whether a card moved from the pile to the hand.
    pub fn use_chopsticks(&mut self, player: PlayerId) -> bool {
        let pile = &mut self.played[player];
        match pile.iter().rposition(|&c| c == Card::Chopsticks) {
            Some(pos) => {
                pile.remove(pos);
                self.hands[player].push(Card::Chopsticks);
                true
            }
            None => false,
        }
    }

    /// Pass every hand to the next seat.
    ///
    /// Reassigns the whole hand list at once; called only after all of a
    /// turn's plays have been applied.
    pub fn pass_hands(&mut self) {
        self.hands.pass_left();
    }

    /// Add per-player score deltas, positionally.
    pub fn add_scores(&mut self, deltas: &[i32]) {
        assert_eq!(deltas.len(), self.player_count, "One score per player");
        for (score, delta) in self.scores.iter_mut().map(|(_, s)| s).zip(deltas) {
            *score += delta;
        }
    }

    /// Move every played pile into the discard pile and clear the piles.
    pub fn discard_played(&mut self) {
        for (_, pile) in self.played.iter_mut() {
            self.discard.extend(pile.drain(..));
        }
    }
}
