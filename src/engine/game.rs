//! A full game: three rounds, then pudding.

use tracing::info;

use super::resolver::TurnResolver;
use super::round::RoundEngine;
use crate::cards::{hand_size, DeckProvider, ShuffledDeck};
use crate::core::{GameConfig, GameRng, GameState, PlayerId, ROUNDS};
use crate::error::GameError;
use crate::rules::{Scorer, SushiGoScorer};
use crate::strategy::{Strategy, StrategyRegistry};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Shared victory: equal score and equal pudding.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Final state of a finished game.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Terminal state: hands and played piles empty, scores final.
    pub state: GameState,
    /// Pudding bonus/penalty added at the end.
    pub pudding_scores: Vec<i32>,
    /// Strategy name per seat.
    pub strategy_names: Vec<String>,
}

impl GameOutcome {
    /// Final scores, by seat.
    #[must_use]
    pub fn scores(&self) -> &[i32] {
        self.state.scores().as_slice()
    }

    /// Pudding collected over the game, by seat.
    #[must_use]
    pub fn puddings(&self) -> &[u32] {
        self.state.puddings().as_slice()
    }

    /// Seats with the highest score; ties go to whoever holds more pudding.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let best = self
            .state
            .player_ids()
            .map(|p| (self.state.scores()[p], self.state.puddings()[p]))
            .max()
            .unwrap_or_default();

        self.state
            .player_ids()
            .filter(|&p| (self.state.scores()[p], self.state.puddings()[p]) == best)
            .collect()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        let winners = self.winners();
        if winners.len() == 1 {
            GameResult::Winner(winners[0])
        } else {
            GameResult::Winners(winners)
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = self.result();
        for (player, name) in self.state.player_ids().zip(&self.strategy_names) {
            let marker = if result.is_winner(player) { " *" } else { "" };
            writeln!(
                f,
                "{player} ({name}): {} points, {} pudding{marker}",
                self.state.scores()[player],
                self.state.puddings()[player],
            )?;
        }
        Ok(())
    }
}

/// A game ready to be played.
pub struct SushiGame {
    strategies: Vec<Box<dyn Strategy>>,
    deck: Box<dyn DeckProvider>,
    scorer: Box<dyn Scorer>,
    engine: RoundEngine,
}

/// Builder for creating a SushiGame.
pub struct SushiGameBuilder {
    config: GameConfig,
    deck: Option<Box<dyn DeckProvider>>,
    scorer: Box<dyn Scorer>,
}

impl Default for SushiGameBuilder {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl SushiGameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            deck: None,
            scorer: Box::new(SushiGoScorer),
        }
    }

    /// Use a custom deck source instead of shuffling `config.deck`.
    pub fn deck_provider(mut self, deck: impl DeckProvider + 'static) -> Self {
        self.deck = Some(Box::new(deck));
        self
    }

    /// Use custom scoring rules.
    pub fn scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Seat the given strategies, in order.
    ///
    /// Fails with `InvalidPlayerCount` unless there are 2-5 of them.
    pub fn build(self, strategies: Vec<Box<dyn Strategy>>) -> Result<SushiGame, GameError> {
        hand_size(strategies.len())?;

        let rng = GameRng::new(self.config.seed);
        let deck: Box<dyn DeckProvider> = match self.deck {
            Some(deck) => deck,
            None => Box::new(ShuffledDeck::new(self.config.deck.clone(), rng.for_context("deck"))),
        };

        Ok(SushiGame {
            strategies,
            deck,
            scorer: self.scorer,
            engine: RoundEngine::new(TurnResolver::new(self.config.mask_first_turn)),
        })
    }

    /// Seat strategies looked up by name.
    ///
    /// Each seat gets its own RNG stream derived from the config seed.
    pub fn build_from_registry(
        self,
        registry: &StrategyRegistry,
        names: &[impl AsRef<str>],
    ) -> Result<SushiGame, GameError> {
        hand_size(names.len())?;

        let mut seat_rng = GameRng::new(self.config.seed).for_context("strategies");
        let strategies = names
            .iter()
            .map(|name| registry.create(name.as_ref(), seat_rng.fork()))
            .collect::<Result<Vec<_>, _>>()?;

        self.build(strategies)
    }
}

impl SushiGame {
    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.strategies.len()
    }

    /// Play all rounds and the pudding scoring.
    pub fn play(mut self) -> Result<GameOutcome, GameError> {
        let mut state = GameState::new(self.player_count());
        let mut deck = self.deck.shuffled_cards();
        info!(
            players = self.player_count(),
            deck = deck.len(),
            "game started"
        );

        for round_num in 0..ROUNDS {
            deck = self.engine.play_round(
                &mut state,
                deck,
                round_num,
                &mut self.strategies,
                self.scorer.as_ref(),
            )?;
        }

        let pudding_scores = self.scorer.score_pudding(state.puddings().as_slice());
        state.add_scores(&pudding_scores);

        let outcome = GameOutcome {
            state,
            pudding_scores,
            strategy_names: self.strategies.iter().map(|s| s.name().to_string()).collect(),
        };
        info!(
            scores = ?outcome.scores(),
            puddings = ?outcome.puddings(),
            result = ?outcome.result(),
            "game finished"
        );
        Ok(outcome)
    }
}
