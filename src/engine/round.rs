//! One round: deal, play every turn, score.
//!
//! `Dealt → (Turn)* → Scored`
//!
//! Each turn resolves all players against the same state, applies every
//! play, then passes hands one seat along in a single step.

use tracing::{debug, info};

use super::resolver::TurnResolver;
use crate::cards::{deal, hand_size, Deck};
use crate::core::{GameState, Play, PlayerMap};
use crate::error::GameError;
use crate::rules::Scorer;
use crate::strategy::Strategy;

/// Drives the turns of a round.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundEngine {
    resolver: TurnResolver,
}

impl RoundEngine {
    #[must_use]
    pub fn new(resolver: TurnResolver) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn resolver(&self) -> &TurnResolver {
        &self.resolver
    }

    /// Play round `round_num` to completion.
    ///
    /// Deals from `deck`, runs one turn per card in a starting hand, scores
    /// the played piles and moves them to the discard pile. Returns the
    /// undealt remainder of the deck.
    pub fn play_round(
        &self,
        state: &mut GameState,
        deck: Deck,
        round_num: u8,
        strategies: &mut [Box<dyn Strategy>],
        scorer: &dyn Scorer,
    ) -> Result<Deck, GameError> {
        let turns = hand_size(state.player_count())?;
        let (hands, deck) = deal(deck, state.player_count())?;
        state.start_round(round_num, hands);
        debug!(round = round_num, hand_size = turns, remaining = deck.len(), "hands dealt");

        for turn in 0..turns {
            state.turn = turn as u8;
            self.play_turn(state, strategies)?;
        }

        let round_scores = score_round(state, scorer);
        info!(
            round = round_num,
            round_scores = ?round_scores,
            totals = ?state.scores().as_slice(),
            "round scored"
        );
        Ok(deck)
    }

    /// Resolve, apply and pass for the current turn.
    ///
    /// On a contract violation the state is left exactly as it was before
    /// the turn.
    pub fn play_turn(
        &self,
        state: &mut GameState,
        strategies: &mut [Box<dyn Strategy>],
    ) -> Result<(), GameError> {
        let plays = self.resolver.resolve_turn(state, strategies)?;
        apply_turn(state, &plays)?;
        state.pass_hands();
        debug!(round = state.round_num, turn = state.turn, "hands passed");
        Ok(())
    }
}

/// Apply every player's validated play.
///
/// Works on a copy and commits only when every play applied, so a failure
/// leaves `state` unchanged.
pub fn apply_turn(state: &mut GameState, plays: &PlayerMap<Play>) -> Result<(), GameError> {
    let mut next = state.clone();
    for (player, play) in plays.iter() {
        if play.is_empty() {
            continue;
        }
        next.apply_play(player, play)?;
    }
    *state = next;
    Ok(())
}

/// Score the played piles, add the result to the totals and discard the
/// piles. Returns this round's per-player scores.
pub fn score_round(state: &mut GameState, scorer: &dyn Scorer) -> Vec<i32> {
    let round_scores = scorer.score_round(state.played_piles().as_slice());
    state.add_scores(&round_scores);
    state.discard_played();
    round_scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::PlayerId;
    use crate::rules::SushiGoScorer;
    use crate::strategy::FirstCard;
    use smallvec::smallvec;

    fn first_card_players(n: usize) -> Vec<Box<dyn Strategy>> {
        (0..n).map(|_| Box::new(FirstCard) as Box<dyn Strategy>).collect()
    }

    #[test]
    fn test_apply_turn_is_all_or_nothing() {
        let mut state = GameState::new(2);
        state.start_round(0, PlayerMap::from_vec(vec![vec![Card::Egg], vec![Card::Squid]]));
        let before = state.clone();

        // Second play cannot be applied
        let plays = PlayerMap::from_vec(vec![smallvec![Card::Egg], smallvec![Card::Tempura]]);
        assert!(apply_turn(&mut state, &plays).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_turn_passes_hands() {
        let mut state = GameState::new(2);
        state.start_round(
            0,
            PlayerMap::from_vec(vec![
                vec![Card::Egg, Card::Salmon],
                vec![Card::Squid, Card::Tempura],
            ]),
        );
        let engine = RoundEngine::default();

        engine.play_turn(&mut state, &mut first_card_players(2)).unwrap();

        assert_eq!(state.played(PlayerId::new(0)), &[Card::Egg]);
        assert_eq!(state.played(PlayerId::new(1)), &[Card::Squid]);
        // Player 0 now holds what was left of player 1's hand
        assert_eq!(state.hand(PlayerId::new(0)), &[Card::Tempura]);
        assert_eq!(state.hand(PlayerId::new(1)), &[Card::Salmon]);
    }

    #[test]
    fn test_play_round_scores_and_discards() {
        let mut state = GameState::new(2);
        let deck = Deck::from_cards(vec![Card::Tempura; 21]);
        let engine = RoundEngine::default();

        let rest = engine
            .play_round(&mut state, deck, 0, &mut first_card_players(2), &SushiGoScorer)
            .unwrap();

        assert_eq!(rest.len(), 1);
        // Ten tempura each: five pairs
        assert_eq!(state.scores().as_slice(), &[25, 25]);
        assert_eq!(state.discard_pile().len(), 20);
        assert!(state.hands().as_slice().iter().all(Vec::is_empty));
        assert!(state.played_piles().as_slice().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_score_round_moves_piles_to_discard() {
        let mut state = GameState::new(2);
        state.start_round(0, PlayerMap::from_vec(vec![vec![Card::Squid], vec![Card::Egg]]));
        apply_turn(
            &mut state,
            &PlayerMap::from_vec(vec![smallvec![Card::Squid], smallvec![Card::Egg]]),
        )
        .unwrap();

        let round_scores = score_round(&mut state, &SushiGoScorer);

        assert_eq!(round_scores, vec![3, 1]);
        assert_eq!(state.scores().as_slice(), &[3, 1]);
        assert_eq!(state.discard_pile().len(), 2);
    }
}
