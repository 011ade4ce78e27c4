//! Round and end-of-game scoring.
//!
//! Scoring is a pure function of the piles: same input, same output. Results
//! are aligned positionally with the input, one entry per player.

use crate::cards::Card;

/// Scores played piles and pudding counts.
///
/// Implementations must be pure: no hidden state between calls.
pub trait Scorer {
    /// Score every player's played pile at the end of a round.
    fn score_round(&self, played: &[Vec<Card>]) -> Vec<i32>;

    /// Score pudding counts at the end of the game.
    fn score_pudding(&self, puddings: &[u32]) -> Vec<i32>;
}

/// Points split between the players with the most maki icons.
pub const MAKI_FIRST: i32 = 6;
/// Points split between the players with the second most maki icons.
pub const MAKI_SECOND: i32 = 3;
/// Points split between the players with the most pudding.
pub const PUDDING_BONUS: i32 = 6;
/// Points lost, split, by the players with the fewest pudding.
pub const PUDDING_PENALTY: i32 = 6;

const DUMPLING_POINTS: [i32; 6] = [0, 1, 3, 6, 10, 15];

/// The published Sushi Go scoring rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct SushiGoScorer;

impl Scorer for SushiGoScorer {
    fn score_round(&self, played: &[Vec<Card>]) -> Vec<i32> {
        let mut scores: Vec<i32> = played.iter().map(|pile| score_pile(pile)).collect();

        let icons: Vec<u32> = played
            .iter()
            .map(|pile| pile.iter().map(|c| c.maki_icons()).sum())
            .collect();
        for (score, bonus) in scores.iter_mut().zip(maki_bonus(&icons)) {
            *score += bonus;
        }

        scores
    }

    fn score_pudding(&self, puddings: &[u32]) -> Vec<i32> {
        let mut scores = vec![0; puddings.len()];
        let (Some(&most), Some(&fewest)) = (puddings.iter().max(), puddings.iter().min()) else {
            return scores;
        };
        if most == fewest {
            return scores;
        }

        split(&mut scores, puddings, most, PUDDING_BONUS);
        // Nobody loses points for pudding in a two-player game
        if puddings.len() > 2 {
            split(&mut scores, puddings, fewest, -PUDDING_PENALTY);
        }
        scores
    }
}

/// Everything in a single pile except maki, which is scored across players.
fn score_pile(pile: &[Card]) -> i32 {
    let count = |kind: Card| pile.iter().filter(|&&c| c == kind).count();

    let tempura = (count(Card::Tempura) / 2) as i32 * 5;
    let sashimi = (count(Card::Sashimi) / 3) as i32 * 10;
    let dumpling = DUMPLING_POINTS[count(Card::Dumpling).min(5)];

    tempura + sashimi + dumpling + score_nigiri(pile)
}

/// Nigiri in play order; each sits on the oldest unused wasabi, if any.
fn score_nigiri(pile: &[Card]) -> i32 {
    let mut unused_wasabi = 0;
    let mut total = 0;
    for &card in pile {
        if card == Card::Wasabi {
            unused_wasabi += 1;
        } else if let Some(value) = card.nigiri_value() {
            if unused_wasabi > 0 {
                unused_wasabi -= 1;
                total += value * 3;
            } else {
                total += value;
            }
        }
    }
    total
}

fn maki_bonus(icons: &[u32]) -> Vec<i32> {
    let mut bonus = vec![0; icons.len()];
    let most = icons.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return bonus;
    }

    let first_count = split(&mut bonus, icons, most, MAKI_FIRST);
    // A tie for first place awards no second place
    if first_count == 1 {
        let second = icons.iter().copied().filter(|&n| n < most).max().unwrap_or(0);
        if second > 0 {
            split(&mut bonus, icons, second, MAKI_SECOND);
        }
    }
    bonus
}

/// Share `points` evenly (rounded toward zero) among every player whose
/// value equals `target`. Returns how many players shared.
fn split(scores: &mut [i32], values: &[u32], target: u32, points: i32) -> usize {
    let winners: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == target)
        .map(|(i, _)| i)
        .collect();
    if winners.is_empty() {
        return 0;
    }

    let share = points / winners.len() as i32;
    for &i in &winners {
        scores[i] += share;
    }
    winners.len()
}
