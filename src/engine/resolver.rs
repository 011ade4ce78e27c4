//! Turn resolution: collect and validate one play per player.
//!
//! Every strategy is shown a view built from the same pre-turn `GameState`,
//! which the resolver only borrows immutably. Nothing is applied here; the
//! round engine applies all plays together once every player has chosen.

use tracing::{debug, warn};

use crate::cards::{remove_cards, Card};
use crate::core::{GameState, GameView, Play, PlayerId, PlayerMap};
use crate::error::GameError;
use crate::strategy::Strategy;

/// Presents views to strategies and validates what they return.
#[derive(Clone, Copy, Debug)]
pub struct TurnResolver {
    mask_first_turn: bool,
}

impl Default for TurnResolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TurnResolver {
    #[must_use]
    pub fn new(mask_first_turn: bool) -> Self {
        Self { mask_first_turn }
    }

    /// The view `player` gets this turn.
    ///
    /// Opponents' hands are masked on turn 0 of each round.
    #[must_use]
    pub fn view_for(&self, state: &GameState, player: PlayerId) -> GameView {
        GameView::new(state, player, self.mask_first_turn && state.turn == 0)
    }

    /// Ask one strategy for its play and validate it against the real hand.
    pub fn resolve(
        &self,
        state: &GameState,
        player: PlayerId,
        strategy: &mut dyn Strategy,
    ) -> Result<Play, GameError> {
        let view = self.view_for(state, player);
        let play = strategy.play_turn(&view);
        debug!(
            player = %player,
            strategy = strategy.name(),
            round = state.round_num,
            turn = state.turn,
            play = ?play,
            "play chosen"
        );
        validate_play(player, state.hand(player), play).inspect_err(|err| {
            warn!(strategy = strategy.name(), %err, "strategy broke the play contract");
        })
    }

    /// Resolve every player's play for the current turn.
    ///
    /// Players whose hand is already empty sit the turn out and get an
    /// empty play. Fails on the first contract violation.
    pub fn resolve_turn(
        &self,
        state: &GameState,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<PlayerMap<Play>, GameError> {
        assert_eq!(
            strategies.len(),
            state.player_count(),
            "One strategy per player"
        );

        let mut plays = Vec::with_capacity(strategies.len());
        for (player, strategy) in state.player_ids().zip(strategies.iter_mut()) {
            if state.hand(player).is_empty() {
                debug!(player = %player, "empty hand, sitting out");
                plays.push(Play::new());
                continue;
            }
            plays.push(self.resolve(state, player, strategy.as_mut())?);
        }
        Ok(PlayerMap::from_vec(plays))
    }
}

/// Check a play against `hand` without touching it.
///
/// In order:
/// 1. one or two cards, else `InvalidPlayCount`
/// 2. two cards need a chopsticks in hand, else `MissingChopsticks`
/// 3. every card removable from a copy of the hand, else `IllegalCard`
pub fn validate_play(player: PlayerId, hand: &[Card], play: Play) -> Result<Play, GameError> {
    if !(1..=2).contains(&play.len()) {
        return Err(GameError::InvalidPlayCount {
            player,
            play: play.to_vec(),
        });
    }

    if play.len() == 2 && !hand.contains(&Card::Chopsticks) {
        return Err(GameError::MissingChopsticks {
            player,
            play: play.to_vec(),
            hand: hand.to_vec(),
        });
    }

    let mut remaining = hand.to_vec();
    if let Err(card) = remove_cards(&mut remaining, &play) {
        return Err(GameError::IllegalCard {
            player,
            card,
            play: play.to_vec(),
            hand: hand.to_vec(),
        });
    }

    Ok(play)
}
