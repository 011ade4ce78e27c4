//! Built-in strategies.

use smallvec::smallvec;

use super::Strategy;
use crate::core::{GameRng, GameView, Play};

/// Plays the first card in hand.
#[derive(Clone, Debug, Default)]
pub struct FirstCard;

impl Strategy for FirstCard {
    fn play_turn(&mut self, view: &GameView) -> Play {
        view.my_hand().iter().take(1).copied().collect()
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Plays a uniformly random card from hand. Never uses chopsticks.
#[derive(Clone, Debug)]
pub struct RandomCard {
    rng: GameRng,
}

impl RandomCard {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomCard {
    fn play_turn(&mut self, view: &GameView) -> Play {
        match self.rng.choose(view.my_hand()) {
            Some(&card) => smallvec![card],
            None => Play::new(),
        }
    }

    fn name(&self) -> &str {
        "rand1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{GameState, PlayerId, PlayerMap};

    fn view_of(hand: Vec<Card>) -> GameView {
        let mut state = GameState::new(2);
        state.start_round(0, PlayerMap::from_vec(vec![hand, vec![Card::Egg]]));
        GameView::new(&state, PlayerId::new(0), true)
    }

    #[test]
    fn test_first_card() {
        let view = view_of(vec![Card::Squid, Card::Egg]);
        assert_eq!(FirstCard.play_turn(&view).as_slice(), &[Card::Squid]);
    }

    #[test]
    fn test_random_card_comes_from_hand() {
        let hand = vec![Card::Squid, Card::Egg, Card::Tempura];
        let view = view_of(hand.clone());
        let mut strategy = RandomCard::new(GameRng::new(3));

        for _ in 0..20 {
            let play = strategy.play_turn(&view);
            assert_eq!(play.len(), 1);
            assert!(hand.contains(&play[0]));
        }
    }

    #[test]
    fn test_random_card_is_seeded() {
        let view = view_of(vec![Card::Squid, Card::Egg, Card::Tempura, Card::Wasabi]);
        let mut a = RandomCard::new(GameRng::new(11));
        let mut b = RandomCard::new(GameRng::new(11));

        for _ in 0..10 {
            assert_eq!(a.play_turn(&view), b.play_turn(&view));
        }
    }
}
