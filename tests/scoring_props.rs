//! Property tests for round and pudding scoring.
//!
//! Scoring is pure: these check alignment, determinism and the seat
//! symmetry of every rule over arbitrary piles.

use proptest::prelude::*;
use sushi_arena::cards::Card;
use sushi_arena::rules::{Scorer, SushiGoScorer, PUDDING_BONUS, PUDDING_PENALTY};

fn pile() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(prop::sample::select(Card::PLAYABLE.to_vec()), 0..12)
}

fn piles() -> impl Strategy<Value = Vec<Vec<Card>>> {
    prop::collection::vec(pile(), 2..=5)
}

fn puddings() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..8, 2..=5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: one score per pile, and the same piles always score the same
    #[test]
    fn prop_round_scoring_is_pure(piles in piles()) {
        let first = SushiGoScorer.score_round(&piles);
        let second = SushiGoScorer.score_round(&piles);

        prop_assert_eq!(first.len(), piles.len());
        prop_assert_eq!(first, second);
    }

    /// Property: round scores are never negative
    #[test]
    fn prop_round_scores_non_negative(piles in piles()) {
        for score in SushiGoScorer.score_round(&piles) {
            prop_assert!(score >= 0);
        }
    }

    /// Property: rotating the seats rotates the scores
    #[test]
    fn prop_round_scoring_ignores_seat(piles in piles(), shift in 0usize..5) {
        let shift = shift % piles.len();
        let mut rotated = piles.clone();
        rotated.rotate_left(shift);

        let mut expected = SushiGoScorer.score_round(&piles);
        expected.rotate_left(shift);

        prop_assert_eq!(SushiGoScorer.score_round(&rotated), expected);
    }

    /// Property: adding a card never lowers a pile's score when nobody has maki
    #[test]
    fn prop_extra_card_never_hurts_without_maki(
        piles in piles(),
        extra in prop::sample::select(Card::PLAYABLE.to_vec()),
    ) {
        let no_maki = |c: &Card| c.maki_icons() == 0;
        prop_assume!(no_maki(&extra));
        let piles: Vec<Vec<Card>> = piles
            .into_iter()
            .map(|p| p.into_iter().filter(no_maki).collect())
            .collect();

        let before = SushiGoScorer.score_round(&piles)[0];
        let mut grown = piles.clone();
        grown[0].push(extra);
        let after = SushiGoScorer.score_round(&grown)[0];

        prop_assert!(after >= before, "{:?} + {:?}: {} -> {}", piles[0], extra, before, after);
    }

    /// Property: pudding scores go only to the extremes and stay within bounds
    #[test]
    fn prop_pudding_extremes(puddings in puddings()) {
        let scores = SushiGoScorer.score_pudding(&puddings);
        prop_assert_eq!(scores.len(), puddings.len());

        let most = *puddings.iter().max().unwrap();
        let fewest = *puddings.iter().min().unwrap();

        for (&count, &score) in puddings.iter().zip(&scores) {
            if most == fewest {
                prop_assert_eq!(score, 0);
            } else if count == most {
                prop_assert!(score > 0 && score <= PUDDING_BONUS);
            } else if count == fewest && puddings.len() > 2 {
                prop_assert!(score < 0 && score >= -PUDDING_PENALTY);
            } else {
                prop_assert_eq!(score, 0);
            }
        }
    }

    /// Property: two-player games never apply the pudding penalty
    #[test]
    fn prop_two_player_pudding_never_negative(a in 0u32..10, b in 0u32..10) {
        for score in SushiGoScorer.score_pudding(&[a, b]) {
            prop_assert!(score >= 0);
        }
    }
}
